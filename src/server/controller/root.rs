use std::sync::Arc;

use axum::{http::StatusCode, http::Uri, response::IntoResponse, Extension, Json};

use crate::{
    model::api::RouteMapDto,
    server::error::{api::ApiError, Error},
};

/// OpenAPI tag for route map routes
pub static ROOT_TAG: &str = "root";

/// List every route the API serves
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Every registered method & path", body = RouteMapDto)
    ),
)]
pub async fn route_map(Extension(route_map): Extension<Arc<RouteMapDto>>) -> impl IntoResponse {
    (StatusCode::OK, Json(route_map.as_ref().clone()))
}

/// Fallback for requests that match no route
pub async fn not_found(uri: Uri) -> Error {
    ApiError::RouteNotFound(uri.path().to_string()).into()
}
