use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::server::{error::auth::AuthError, model::app::AppState, util::token::Claims};

/// Extractor that requires a valid bearer token.
///
/// Reads `Authorization: Bearer <token>` (scheme matched case-insensitively) and verifies the token's signature and expiry before
/// the handler body runs. Requests without a usable token are rejected with a 401.
///
/// # Example
///
/// ```ignore
/// async fn handler(BearerUser(claims): BearerUser) -> impl IntoResponse {
///     format!("Hello, user {}!", claims.sub)
/// }
/// ```
pub struct BearerUser(pub Claims);

impl FromRequestParts<AppState> for BearerUser {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().split_once(' '))
            // Auth schemes are case-insensitive
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim())
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = state.tokens.verify(token)?;

        Ok(Self(claims))
    }
}
