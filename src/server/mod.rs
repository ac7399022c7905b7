//! Server application core modules.
//!
//! This module contains all server-side functionality for the catalog, including HTTP routing,
//! persistence through SeaORM repositories, password hashing and bearer token authentication.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// Environment configuration
pub mod config;
/// HTTP handlers
pub mod controller;
/// Repositories over the entity store
pub mod data;
/// Error types & their HTTP responses
pub mod error;
/// Application state & database model aliases
pub mod model;
/// Route registration & OpenAPI document
pub mod router;
/// Business logic combining repositories
pub mod service;
/// Database connection & token key setup
pub mod startup;
/// Password hashing & bearer tokens
pub mod util;
