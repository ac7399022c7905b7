use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto},
    server::{
        controller::util::extract::Path,
        data::planet::PlanetRepository,
        error::{api::ApiError, Error},
        model::app::AppState,
    },
};

/// OpenAPI tag for planet routes
pub static PLANET_TAG: &str = "planet";

/// List every planet in the catalog
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Every planet ordered by ID", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetRepository::new(&state.db).get_all().await?;

    let planet_dtos: Vec<PlanetDto> = planets.into_iter().map(PlanetDto::from).collect();

    Ok((StatusCode::OK, Json(planet_dtos)))
}

/// Get a single planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "The requested planet", body = PlanetDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(planet) = PlanetRepository::new(&state.db)
        .get_by_id(planet_id)
        .await?
    else {
        return Err(ApiError::PlanetNotFound(planet_id).into());
    };

    Ok((StatusCode::OK, Json(PlanetDto::from(planet))))
}
