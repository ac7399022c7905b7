use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, PaginatorTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user whose password is stored as an Argon2id hash.
    pub async fn insert_user(&self, email: &str, password: &str) -> Result<UserModel, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();

        self.insert_user_with_stored_password(email, Some(hash)).await
    }

    /// Insert an active user with the password column set verbatim.
    ///
    /// Used to simulate rows written with a plaintext password or no password at all.
    pub async fn insert_user_with_stored_password(
        &self,
        email: &str,
        stored_password: Option<String>,
    ) -> Result<UserModel, TestError> {
        let user = entity::user::ActiveModel {
            first_name: ActiveValue::Set(Some("Test".to_string())),
            email: ActiveValue::Set(Some(email.to_string())),
            password: ActiveValue::Set(stored_password),
            is_active: ActiveValue::Set(Some(true)),
            ..Default::default()
        };

        Ok(user.insert(&self.setup.db).await?)
    }

    pub async fn count(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::User::find().count(&self.setup.db).await?)
    }
}
