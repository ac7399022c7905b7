//! Helpers shared by the integration tests.

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    response::IntoResponse,
    Router,
};
use holocron::server::{model::app::AppState, router::routes};
use holocron_test_utils::TestContext;
use serde_json::Value;
use tower::ServiceExt;

/// Converts a handler result into its response regardless of success.
pub fn into_response<T, E>(result: Result<T, E>) -> Response<Body>
where
    T: IntoResponse,
    E: IntoResponse,
{
    match result {
        Ok(resp) => resp.into_response(),
        Err(err) => err.into_response(),
    }
}

/// Reads a response body as JSON.
pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Builds the full application router over the test database.
pub fn app(test: &TestContext) -> Router {
    let state: AppState = test.to_app_state();

    routes().with_state(state)
}

/// Sends a request through the full router and returns the status & JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(request).await.unwrap();
    let status = resp.status();

    (status, body_json(resp).await)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
