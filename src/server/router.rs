//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications, the
//! route map served at `/` is derived from the same document, and Swagger UI is configured to
//! provide interactive API documentation at `/api/docs`.

use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::{RouteDto, RouteMapDto},
    server::{controller, model::app::AppState},
};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Route map
/// - `GET /user` - List users
/// - `POST /create-user` - Register a user
/// - `GET /users/{id}/favorites` - List favorites
/// - `GET /people`, `GET /people/{id}` - People catalog
/// - `GET /planets`, `GET /planets/{id}` - Planet catalog
/// - `POST|DELETE /favorite/planet/{id}` - Favorite or unfavorite a planet
/// - `POST|DELETE /favorite/people/{id}` - Favorite or unfavorite a person
/// - `GET /token` - Issue a bearer token
/// - `GET /protected` - Identity of the bearer token's user
///
/// Requests matching no route receive a JSON 404.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes and middleware, ready to be given its
/// state.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, tokens };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Star Wars catalog API"), tags(
        (name = controller::root::ROOT_TAG, description = "Route map"),
        (name = controller::user::USER_TAG, description = "User registration & listing"),
        (name = controller::people::PEOPLE_TAG, description = "People catalog"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite people & planets"),
        (name = controller::auth::AUTH_TAG, description = "Bearer token authentication"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::root::route_map))
        .routes(routes!(controller::user::list_users))
        .routes(routes!(controller::user::create_user))
        .routes(routes!(controller::favorite::list_favorites))
        .routes(routes!(controller::people::list_people))
        .routes(routes!(controller::people::get_person))
        .routes(routes!(controller::planet::list_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(
            controller::favorite::favorite_planet,
            controller::favorite::unfavorite_planet
        ))
        .routes(routes!(
            controller::favorite::favorite_person,
            controller::favorite::unfavorite_person
        ))
        .routes(routes!(controller::auth::issue_token))
        .routes(routes!(controller::auth::protected))
        .split_for_parts();

    let route_map = Arc::new(build_route_map(&api));

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(controller::root::not_found)
        .layer(Extension(route_map))
        .layer(TraceLayer::new_for_http())
}

/// Lists every path & method pair in the OpenAPI document.
///
/// Routes are ordered by path then by method.
fn build_route_map(api: &utoipa::openapi::OpenApi) -> RouteMapDto {
    let mut routes = Vec::new();

    for (path, item) in api.paths.paths.iter() {
        let operations = [
            ("GET", item.get.is_some()),
            ("POST", item.post.is_some()),
            ("PUT", item.put.is_some()),
            ("PATCH", item.patch.is_some()),
            ("DELETE", item.delete.is_some()),
        ];

        for (method, _) in operations.into_iter().filter(|(_, present)| *present) {
            routes.push(RouteDto {
                method: method.to_string(),
                path: path.clone(),
            });
        }
    }

    routes.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.method.cmp(&b.method)));

    RouteMapDto { routes }
}
