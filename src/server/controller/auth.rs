use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{ProtectedDto, TokenDto, TokenParams},
    },
    server::{
        controller::util::{bearer::BearerUser, extract::Query},
        error::Error,
        model::app::AppState,
        service::auth::AuthService,
    },
};

/// OpenAPI tag for authentication routes
pub static AUTH_TAG: &str = "auth";

/// Exchange an email & password for a bearer token
///
/// # Responses
/// - 200 (Success): Signed token and the ID of the user it identifies
/// - 401 (Unauthorized): Unknown email, wrong password or missing parameters
/// - 500 (Internal Server Error): Database error or failure signing the token
#[utoipa::path(
    get,
    path = "/token",
    tag = AUTH_TAG,
    params(TokenParams),
    responses(
        (status = 200, description = "Token issued", body = TokenDto),
        (status = 401, description = "Bad username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn issue_token(
    State(state): State<AppState>,
    Query(params): Query<TokenParams>,
) -> Result<impl IntoResponse, Error> {
    let token = AuthService::new(&state.db, &state.tokens)
        .issue_token(params)
        .await?;

    Ok((StatusCode::OK, Json(token)))
}

/// Return the identity of the bearer token's user
///
/// The token is verified before the handler runs, requests without a valid token never reach
/// the database.
#[utoipa::path(
    get,
    path = "/protected",
    tag = AUTH_TAG,
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Identity of the token's user", body = ProtectedDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn protected(
    State(state): State<AppState>,
    BearerUser(claims): BearerUser,
) -> Result<impl IntoResponse, Error> {
    let identity = AuthService::new(&state.db, &state.tokens)
        .get_protected(&claims)
        .await?;

    Ok((StatusCode::OK, Json(identity)))
}
