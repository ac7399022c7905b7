//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, verifying status codes and response
//! bodies for success and failure paths.

mod auth;
mod favorite;
mod people;
mod planet;
mod user;
