//! Factory functions for generating in-memory database models.
//!
//! These models never touch the database and are suitable for unit tests of pure projections.

use crate::model::{FavoriteModel, PersonModel, PlanetModel, UserModel};

pub fn mock_person_model(id: i32, name: &str) -> PersonModel {
    PersonModel {
        id,
        name: Some(name.to_string()),
        birth_year: Some(19),
        eye_color: Some("blue".to_string()),
        gender: Some("male".to_string()),
        hair_color: Some("blond".to_string()),
        height: Some(172),
        mass: Some(77),
    }
}

pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    PlanetModel {
        id,
        name: Some(name.to_string()),
        climate: Some("temperate".to_string()),
        gravity: Some(1),
        orbital_period: Some(368),
        population: Some(1_000_000_000_000),
    }
}

/// Create a mock user whose password column holds a placeholder hash.
pub fn mock_user_model(id: i32, email: &str) -> UserModel {
    UserModel {
        id,
        first_name: Some("Test".to_string()),
        email: Some(email.to_string()),
        password: Some("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string()),
        is_active: Some(true),
    }
}

pub fn mock_favorite_model(
    id: i32,
    name: &str,
    people_id: Option<i32>,
    planets_id: Option<i32>,
) -> FavoriteModel {
    FavoriteModel {
        id,
        name: Some(name.to_string()),
        user_id: None,
        people_id,
        planets_id,
    }
}
