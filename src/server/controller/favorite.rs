use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, favorite::FavoriteDto},
    server::{
        controller::util::extract::Path, error::Error, model::app::AppState,
        service::favorite::FavoriteService,
    },
};

/// OpenAPI tag for favorite routes
pub static FAVORITE_TAG: &str = "favorite";

/// List favorites
///
/// Favorites are not scoped to a user, every favorite is returned whatever ID the path names.
#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "User ID, currently ignored")),
    responses(
        (status = 200, description = "Every favorite ordered by ID", body = Vec<FavoriteDto>),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(_user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db).get_favorites().await?;

    let favorite_dtos: Vec<FavoriteDto> = favorites.into_iter().map(FavoriteDto::from).collect();

    Ok((StatusCode::OK, Json(favorite_dtos)))
}

/// Favorite a planet
#[utoipa::path(
    post,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the planet to favorite")),
    responses(
        (status = 200, description = "The newly created favorite", body = FavoriteDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .favorite_planet(planet_id)
        .await?;

    Ok((StatusCode::OK, Json(FavoriteDto::from(favorite))))
}

/// Favorite a person
#[utoipa::path(
    post,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the person to favorite")),
    responses(
        (status = 200, description = "The newly created favorite", body = FavoriteDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn favorite_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .favorite_person(person_id)
        .await?;

    Ok((StatusCode::OK, Json(FavoriteDto::from(favorite))))
}

/// Remove the oldest favorite referencing a planet
#[utoipa::path(
    delete,
    path = "/favorite/planet/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the favorited planet")),
    responses(
        (status = 200, description = "The deleted favorite", body = FavoriteDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Favorite planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unfavorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .unfavorite_planet(planet_id)
        .await?;

    Ok((StatusCode::OK, Json(FavoriteDto::from(favorite))))
}

/// Remove the oldest favorite referencing a person
#[utoipa::path(
    delete,
    path = "/favorite/people/{id}",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "ID of the favorited person")),
    responses(
        (status = 200, description = "The deleted favorite", body = FavoriteDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Favorite person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unfavorite_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .unfavorite_person(person_id)
        .await?;

    Ok((StatusCode::OK, Json(FavoriteDto::from(favorite))))
}
