//! Test fixture modules for database records and bearer tokens.
//!
//! - `auth` - Bearer tokens signed with arbitrary claims
//! - `catalog` - People and planets
//! - `factory` - In-memory models that never touch the database
//! - `favorite` - Favorites referencing people or planets
//! - `user` - Users with hashed passwords

pub mod auth;
pub mod catalog;
pub mod factory;
pub mod favorite;
pub mod user;
