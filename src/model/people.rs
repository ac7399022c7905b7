use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Serialized person, `eye_color` is stored but not exposed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: Option<String>,
    pub birth_year: Option<i32>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
}

impl From<entity::people::Model> for PersonDto {
    fn from(person: entity::people::Model) -> Self {
        Self {
            id: person.id,
            name: person.name,
            birth_year: person.birth_year,
            gender: person.gender,
            hair_color: person.hair_color,
            height: person.height,
            mass: person.mass,
        }
    }
}
