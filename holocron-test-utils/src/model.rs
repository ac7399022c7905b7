//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main crate to keep fixture signatures consistent.

pub type UserModel = entity::user::Model;

pub type PersonModel = entity::people::Model;

pub type PlanetModel = entity::planets::Model;

pub type FavoriteModel = entity::favorites::Model;
