//! Error types for the catalog server.
//!
//! This module provides the error handling system with specialized error types for each concern
//! (deliberate API errors, authentication, configuration, password hashing). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for their `Display` and `Error`
//! implementations. Every error response carries a JSON [`ErrorDto`] body.

/// Deliberately raised request errors
pub mod api;
/// Authentication failures
pub mod auth;
/// Configuration errors
pub mod config;
/// Password hashing errors
pub mod password;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        api::ApiError, auth::AuthError, config::ConfigError, password::PasswordError,
    },
};

/// Main error type for the catalog server.
///
/// Aggregates the domain-specific error types and external library errors into a single type.
/// `#[from]` conversions allow propagation with the `?` operator. Deliberately raised API errors
/// (`ApiError`) and authentication failures (`AuthError`) map to client error responses; every
/// other variant is an unexpected fault and becomes a generic 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Deliberately raised API error (not found, validation failure).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Authentication error (bad credentials, missing or invalid bearer token).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Password hashing or verification failure.
    #[error(transparent)]
    PasswordError(#[from] PasswordError),
    /// Blocking task (password hashing) panicked or was cancelled.
    #[error(transparent)]
    TaskJoinError(#[from] tokio::task::JoinError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Token encoding error.
    #[error(transparent)]
    TokenError(#[from] jsonwebtoken::errors::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures and malformed requests
/// - 401 Unauthorized - Bad credentials or missing/invalid bearer token
/// - 404 Not Found - Missing people, planets, favorites or routes
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ApiError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::ApiError(ApiError::InvalidRequest(rejection.body_text()))
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Self::ApiError(ApiError::InvalidRequest(rejection.body_text()))
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Self::ApiError(ApiError::InvalidRequest(rejection.body_text()))
    }
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            message: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
