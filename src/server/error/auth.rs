use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Authentication failures.
///
/// Every variant is answered with a 401 and a generic message that does not reveal which
/// credential was wrong.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email, wrong password or missing credentials
    #[error("No user matches the supplied username and password")]
    BadCredentials,
    /// No `Authorization: Bearer` header
    #[error("Request is missing a bearer token")]
    MissingToken,
    /// Token is malformed, forged or expired
    #[error("Bearer token rejected: {0}")]
    InvalidToken(jsonwebtoken::errors::Error),
    /// Token subject is not a user ID
    #[error("Bearer token subject {0:?} is not a valid user ID")]
    InvalidSubject(String),
    /// Token is valid but its user no longer exists
    #[error("User ID {0} from a valid bearer token was not found in database")]
    UserNotInDatabase(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::BadCredentials => "Bad username or password",
            Self::MissingToken => "Missing bearer token",
            Self::InvalidToken(_) | Self::InvalidSubject(_) | Self::UserNotInDatabase(_) => {
                "Invalid or expired token"
            }
        };

        error_response(StatusCode::UNAUTHORIZED, message)
    }
}
