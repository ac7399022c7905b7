//! Business logic sitting between controllers and repositories.
//!
//! Services combine repository calls and raise [`ApiError`](crate::server::error::api::ApiError)
//! or [`AuthError`](crate::server::error::auth::AuthError) when a request precondition fails.

/// Token issuance & the protected endpoint
pub mod auth;
/// Favoriting & unfavoriting people and planets
pub mod favorite;
/// User registration & listing
pub mod user;
