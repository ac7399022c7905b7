use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Serialized favorite.
///
/// Foreign keys are not exposed, a favorite is identified on the wire only by its id and the
/// name copied from its target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub name: Option<String>,
}

impl From<entity::favorites::Model> for FavoriteDto {
    fn from(favorite: entity::favorites::Model) -> Self {
        Self {
            id: favorite.id,
            name: favorite.name,
        }
    }
}
