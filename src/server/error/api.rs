use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors deliberately raised by handlers when a request precondition fails.
///
/// The `Display` output is meant for logs and may include ids; the response body carries a
/// fixed human-readable message.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No person has the requested ID
    #[error("Person ID {0} not found")]
    PersonNotFound(i32),
    /// No planet has the requested ID
    #[error("Planet ID {0} not found")]
    PlanetNotFound(i32),
    /// No favorite references the person to unfavorite
    #[error("No favorite references person ID {0}")]
    FavoritePersonNotFound(i32),
    /// No favorite references the planet to unfavorite
    #[error("No favorite references planet ID {0}")]
    FavoritePlanetNotFound(i32),
    /// Email or password missing or empty
    #[error("User creation request is missing an email or password")]
    MissingCredentials,
    /// Another user already holds the email
    #[error("Email {0:?} is already registered")]
    EmailAlreadyRegistered(String),
    /// Path, query or body failed to parse
    #[error("Malformed request: {0}")]
    InvalidRequest(String),
    /// No route matches the request path
    #[error("No route matches {0}")]
    RouteNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::PersonNotFound(_) => error_response(StatusCode::NOT_FOUND, "Person not found"),
            Self::PlanetNotFound(_) => error_response(StatusCode::NOT_FOUND, "Planet not found"),
            Self::FavoritePersonNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Favorite person not found")
            }
            Self::FavoritePlanetNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Favorite planet not found")
            }
            Self::MissingCredentials => {
                error_response(StatusCode::BAD_REQUEST, "Email and password are required")
            }
            Self::EmailAlreadyRegistered(_) => {
                error_response(StatusCode::BAD_REQUEST, "Email already registered")
            }
            Self::InvalidRequest(reason) => error_response(StatusCode::BAD_REQUEST, reason),
            Self::RouteNotFound(_) => error_response(StatusCode::NOT_FOUND, "Not found"),
        }
    }
}
