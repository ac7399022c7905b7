//! Favorites catalog API for people and planets.
//!
//! The [`server`] module holds the HTTP backend (routing, persistence, authentication) while
//! [`model`] holds the wire-level DTOs the API serializes.

pub mod model;
pub mod server;
