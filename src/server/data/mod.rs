//! Data access layer repositories.
//!
//! Repositories wrap a borrowed connection and expose the entity store's create, read and delete
//! operations. Single-entity reads return `Ok(None)` on absence and list reads return an empty
//! vector on an empty table, never an error. Each write commits on its own.

/// Favorites referencing people or planets
pub mod favorite;
/// People catalog
pub mod people;
/// Planet catalog
pub mod planet;
/// Registered users
pub mod user;
