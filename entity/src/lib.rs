//! SeaORM entity definitions for the favorites catalog.

pub mod prelude;

pub mod favorites;
pub mod people;
pub mod planets;
pub mod user;
