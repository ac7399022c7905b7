use sea_orm::DatabaseConnection;

use crate::server::{config::DEFAULT_JWT_EXPIRATION_MINUTES, util::token::TokenKeys};

/// State handed to every handler.
///
/// The database connection is the only shared mutable state; handlers receive it through
/// `State<AppState>` rather than a process-wide global.
#[derive(Clone)]
pub struct AppState {
    /// Pooled connection to the entity store
    pub db: DatabaseConnection,
    /// Keys used to issue and verify bearer tokens
    pub tokens: TokenKeys,
}

/// Builds state from a connection and a signing secret using the default token lifetime.
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, secret): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            tokens: TokenKeys::new(
                secret.as_bytes(),
                chrono::Duration::minutes(DEFAULT_JWT_EXPIRATION_MINUTES),
            ),
        }
    }
}
