use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, PaginatorTrait, QueryOrder};

use crate::{
    error::TestError,
    model::{FavoriteModel, PersonModel, PlanetModel},
    TestContext,
};

impl TestContext {
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_for_person(&self, person: &PersonModel) -> Result<FavoriteModel, TestError> {
        let favorite = entity::favorites::ActiveModel {
            name: ActiveValue::Set(person.name.clone()),
            people_id: ActiveValue::Set(Some(person.id)),
            ..Default::default()
        };

        Ok(favorite.insert(&self.setup.db).await?)
    }

    pub async fn insert_for_planet(&self, planet: &PlanetModel) -> Result<FavoriteModel, TestError> {
        let favorite = entity::favorites::ActiveModel {
            name: ActiveValue::Set(planet.name.clone()),
            planets_id: ActiveValue::Set(Some(planet.id)),
            ..Default::default()
        };

        Ok(favorite.insert(&self.setup.db).await?)
    }

    /// All favorites ordered by ID.
    pub async fn all(&self) -> Result<Vec<FavoriteModel>, TestError> {
        Ok(entity::prelude::Favorites::find()
            .order_by_asc(entity::favorites::Column::Id)
            .all(&self.setup.db)
            .await?)
    }

    pub async fn count(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::Favorites::find()
            .count(&self.setup.db)
            .await?)
    }
}
