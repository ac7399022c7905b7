use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, people::PersonDto},
    server::{
        controller::util::extract::Path,
        data::people::PeopleRepository,
        error::{api::ApiError, Error},
        model::app::AppState,
    },
};

/// OpenAPI tag for people routes
pub static PEOPLE_TAG: &str = "people";

/// List every person in the catalog
#[utoipa::path(
    get,
    path = "/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Every person ordered by ID", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = PeopleRepository::new(&state.db).get_all().await?;

    let people_dtos: Vec<PersonDto> = people.into_iter().map(PersonDto::from).collect();

    Ok((StatusCode::OK, Json(people_dtos)))
}

/// Get a single person by ID
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = PEOPLE_TAG,
    params(("id" = i32, Path, description = "ID of the person")),
    responses(
        (status = 200, description = "The requested person", body = PersonDto),
        (status = 400, description = "ID is not an integer", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(person) = PeopleRepository::new(&state.db)
        .get_by_id(person_id)
        .await?
    else {
        return Err(ApiError::PersonNotFound(person_id).into());
    };

    Ok((StatusCode::OK, Json(PersonDto::from(person))))
}
