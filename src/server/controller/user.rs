use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::util::extract::JsonBody, error::Error, model::app::AppState,
        service::user::UserService,
    },
};

/// OpenAPI tag for user routes
pub static USER_TAG: &str = "user";

/// List every registered user
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Every user ordered by ID", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_users().await?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, Json(user_dtos)))
}

/// Register a new user
///
/// The password is hashed before it is stored.
#[utoipa::path(
    post,
    path = "/create-user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = MessageDto),
        (status = 400, description = "Email or password missing, email already registered, or malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    UserService::new(&state.db).create_user(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "User created successfully".to_string(),
        }),
    ))
}
