use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::UserModel;

/// Reads & writes the `user` table
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user
    ///
    /// `password_hash` must already be hashed, this method stores it verbatim.
    pub async fn create(
        &self,
        first_name: Option<String>,
        email: String,
        password_hash: String,
    ) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            first_name: ActiveValue::Set(first_name),
            email: ActiveValue::Set(Some(email)),
            password: ActiveValue::Set(Some(password_hash)),
            is_active: ActiveValue::Set(Some(true)),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Returns every user ordered by ID
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the user with the given ID, `None` if absent
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Returns the user registered with the given email, `None` if absent
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
