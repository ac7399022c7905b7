//! Environment configuration.

use crate::server::error::config::ConfigError;

/// Store used when `DATABASE_URL` is unset.
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";
/// Development-only signing secret used when `JWT_SECRET_KEY` is unset.
pub static DEFAULT_JWT_SECRET: &str = "super-secret";
/// Token lifetime used when `JWT_EXPIRATION_MINUTES` is unset.
pub const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 15;
/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration loaded from environment variables.
pub struct Config {
    /// Connection string for the backing store
    pub database_url: String,
    /// Secret used to sign and verify bearer tokens
    pub jwt_secret: String,
    /// Whether `jwt_secret` is the hard-coded development default
    pub jwt_secret_is_default: bool,
    /// Lifetime of issued bearer tokens in minutes
    pub jwt_expiration_minutes: i64,
    /// Address to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Every variable is optional; only malformed values are rejected.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration with defaults applied
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` or `JWT_EXPIRATION_MINUTES` could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET_KEY").ok();

        Ok(Self {
            database_url: database_url(std::env::var("DATABASE_URL").ok()),
            jwt_secret_is_default: jwt_secret.is_none(),
            jwt_secret: jwt_secret.unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            jwt_expiration_minutes: jwt_expiration_minutes(
                std::env::var("JWT_EXPIRATION_MINUTES").ok(),
            )?,
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: port(std::env::var("PORT").ok())?,
        })
    }
}

/// Resolves the database URL, normalising Heroku-style `postgres://` URLs.
fn database_url(value: Option<String>) -> String {
    match value {
        Some(url) => match url.strip_prefix("postgres://") {
            Some(rest) => format!("postgresql://{}", rest),
            None => url,
        },
        None => DEFAULT_DATABASE_URL.to_string(),
    }
}

fn jwt_expiration_minutes(value: Option<String>) -> Result<i64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_JWT_EXPIRATION_MINUTES);
    };

    match value.parse::<i64>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(ConfigError::InvalidEnvValue {
            var: "JWT_EXPIRATION_MINUTES".to_string(),
            reason: format!("expected a positive number of minutes, got {:?}", value),
        }),
    }
}

fn port(value: Option<String>) -> Result<u16, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_PORT);
    };

    value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
        var: "PORT".to_string(),
        reason: e.to_string(),
    })
}
