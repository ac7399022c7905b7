use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::db::FavoriteModel;

/// Reads & writes the `favorites` table
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every favorite ordered by ID
    pub async fn get_all(&self) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .order_by_asc(entity::favorites::Column::Id)
            .all(self.db)
            .await
    }

    /// Creates a favorite referencing a person, storing a copy of the person's name
    pub async fn create_for_person(
        &self,
        name: Option<String>,
        person_id: i32,
    ) -> Result<FavoriteModel, DbErr> {
        let favorite = entity::favorites::ActiveModel {
            name: ActiveValue::Set(name),
            people_id: ActiveValue::Set(Some(person_id)),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Creates a favorite referencing a planet, storing a copy of the planet's name
    pub async fn create_for_planet(
        &self,
        name: Option<String>,
        planet_id: i32,
    ) -> Result<FavoriteModel, DbErr> {
        let favorite = entity::favorites::ActiveModel {
            name: ActiveValue::Set(name),
            planets_id: ActiveValue::Set(Some(planet_id)),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Finds the oldest favorite (lowest ID) referencing the person
    pub async fn find_first_by_person(
        &self,
        person_id: i32,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::PeopleId.eq(person_id))
            .order_by_asc(entity::favorites::Column::Id)
            .one(self.db)
            .await
    }

    /// Finds the oldest favorite (lowest ID) referencing the planet
    pub async fn find_first_by_planet(
        &self,
        planet_id: i32,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::PlanetsId.eq(planet_id))
            .order_by_asc(entity::favorites::Column::Id)
            .one(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorites::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
