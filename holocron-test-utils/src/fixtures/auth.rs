use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;

use crate::{error::TestError, TestContext};

/// Mirrors the claims the server signs into bearer tokens.
#[derive(Serialize)]
struct TokenClaims<'a> {
    sub: String,
    username: Option<&'a str>,
    iat: i64,
    exp: i64,
}

impl TestContext {
    pub fn auth(&self) -> AuthFixtures<'_> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// Sign a token with the test secret that expires after `expires_in`.
    ///
    /// A negative duration produces an already expired token.
    pub fn token(
        &self,
        subject: &str,
        username: Option<&str>,
        expires_in: Duration,
    ) -> Result<String, TestError> {
        self.token_with_secret(&self.setup.jwt_secret, subject, username, expires_in)
    }

    /// Sign a token with an arbitrary secret.
    pub fn token_with_secret(
        &self,
        secret: &str,
        subject: &str,
        username: Option<&str>,
        expires_in: Duration,
    ) -> Result<String, TestError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: subject.to_string(),
            username,
            iat: now.timestamp(),
            exp: (now + expires_in).timestamp(),
        };

        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?)
    }
}
