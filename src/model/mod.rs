//! Wire-level data transfer objects.
//!
//! Each DTO is the serialized projection of a stored entity. Projections are built with `From`
//! conversions from the database models and deliberately omit internal fields.

pub mod api;
pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;
