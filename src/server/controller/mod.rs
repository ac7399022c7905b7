//! HTTP controller endpoints for the catalog web API.
//!
//! This module contains Axum handlers for the people & planet catalog, favorites, user
//! registration and bearer token authentication. Controllers extract request inputs, call into
//! services or repositories, and return JSON responses. Every handler carries a utoipa
//! annotation which feeds both the OpenAPI document and the route map served at `/`.

/// `/token` & `/protected`
pub mod auth;
/// Favorite listing, creation & removal
pub mod favorite;
/// `/people` catalog
pub mod people;
/// `/planets` catalog
pub mod planet;
/// Route map & fallback
pub mod root;
/// User listing & registration
pub mod user;
/// Shared extractors
pub mod util;
