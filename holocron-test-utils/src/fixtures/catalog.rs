use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    error::TestError,
    model::{PersonModel, PlanetModel},
    TestContext,
};

impl TestContext {
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Insert a person with standard test values and the given name.
    pub async fn insert_mock_person(&self, name: &str) -> Result<PersonModel, TestError> {
        let person = entity::people::ActiveModel {
            name: ActiveValue::Set(Some(name.to_string())),
            birth_year: ActiveValue::Set(Some(19)),
            eye_color: ActiveValue::Set(Some("blue".to_string())),
            gender: ActiveValue::Set(Some("male".to_string())),
            hair_color: ActiveValue::Set(Some("blond".to_string())),
            height: ActiveValue::Set(Some(172)),
            mass: ActiveValue::Set(Some(77)),
            ..Default::default()
        };

        Ok(person.insert(&self.setup.db).await?)
    }

    /// Insert a planet with standard test values and the given name.
    pub async fn insert_mock_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        let planet = entity::planets::ActiveModel {
            name: ActiveValue::Set(Some(name.to_string())),
            climate: ActiveValue::Set(Some("arid".to_string())),
            gravity: ActiveValue::Set(Some(1)),
            orbital_period: ActiveValue::Set(Some(304)),
            population: ActiveValue::Set(Some(200_000)),
            ..Default::default()
        };

        Ok(planet.insert(&self.setup.db).await?)
    }

    /// Rename a planet in place, used to check favorites keep their copied name.
    pub async fn rename_planet(
        &self,
        planet: PlanetModel,
        name: &str,
    ) -> Result<PlanetModel, TestError> {
        let mut planet: entity::planets::ActiveModel = planet.into();
        planet.name = ActiveValue::Set(Some(name.to_string()));

        Ok(planet.update(&self.setup.db).await?)
    }
}
