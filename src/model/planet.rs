use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: Option<String>,
    pub climate: Option<String>,
    pub gravity: Option<i32>,
    pub orbital_period: Option<i32>,
    pub population: Option<i64>,
}

impl From<entity::planets::Model> for PlanetDto {
    fn from(planet: entity::planets::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            gravity: planet.gravity,
            orbital_period: planet.orbital_period,
            population: planet.population,
        }
    }
}
