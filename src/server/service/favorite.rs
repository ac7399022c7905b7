use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        favorite::FavoriteRepository, people::PeopleRepository, planet::PlanetRepository,
    },
    error::{api::ApiError, Error},
    model::db::FavoriteModel,
};

/// Creates & removes favorites for people and planets
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every favorite regardless of which user the request names
    pub async fn get_favorites(&self) -> Result<Vec<FavoriteModel>, Error> {
        let favorites = FavoriteRepository::new(self.db).get_all().await?;

        Ok(favorites)
    }

    /// Favorites a planet, copying the planet's current name onto the favorite
    ///
    /// # Returns
    /// - `Ok(FavoriteModel)` - The newly created favorite
    /// - `Err(Error::ApiError(ApiError::PlanetNotFound))` - No planet has the provided ID
    /// - `Err(Error::DbErr)` - Database error
    pub async fn favorite_planet(&self, planet_id: i32) -> Result<FavoriteModel, Error> {
        let Some(planet) = PlanetRepository::new(self.db).get_by_id(planet_id).await? else {
            return Err(ApiError::PlanetNotFound(planet_id).into());
        };

        let favorite = FavoriteRepository::new(self.db)
            .create_for_planet(planet.name, planet.id)
            .await?;

        Ok(favorite)
    }

    /// Favorites a person, copying the person's current name onto the favorite
    ///
    /// # Returns
    /// - `Ok(FavoriteModel)` - The newly created favorite
    /// - `Err(Error::ApiError(ApiError::PersonNotFound))` - No person has the provided ID
    /// - `Err(Error::DbErr)` - Database error
    pub async fn favorite_person(&self, person_id: i32) -> Result<FavoriteModel, Error> {
        let Some(person) = PeopleRepository::new(self.db).get_by_id(person_id).await? else {
            return Err(ApiError::PersonNotFound(person_id).into());
        };

        let favorite = FavoriteRepository::new(self.db)
            .create_for_person(person.name, person.id)
            .await?;

        Ok(favorite)
    }

    /// Removes the oldest favorite referencing the planet and returns it
    ///
    /// Only a single favorite is removed when duplicates exist.
    pub async fn unfavorite_planet(&self, planet_id: i32) -> Result<FavoriteModel, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let Some(favorite) = favorite_repo.find_first_by_planet(planet_id).await? else {
            return Err(ApiError::FavoritePlanetNotFound(planet_id).into());
        };

        favorite_repo.delete(favorite.id).await?;

        Ok(favorite)
    }

    /// Removes the oldest favorite referencing the person and returns it
    ///
    /// Only a single favorite is removed when duplicates exist.
    pub async fn unfavorite_person(&self, person_id: i32) -> Result<FavoriteModel, Error> {
        let favorite_repo = FavoriteRepository::new(self.db);

        let Some(favorite) = favorite_repo.find_first_by_person(person_id).await? else {
            return Err(ApiError::FavoritePersonNotFound(person_id).into());
        };

        favorite_repo.delete(favorite.id).await?;

        Ok(favorite)
    }
}
