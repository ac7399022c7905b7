//! Wrappers around axum's extractors that reject malformed input with a JSON 400 instead of
//! axum's plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::Error;

/// Path parameters, rejected with a JSON 400 when they fail to parse.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);

/// Query string parameters, rejected with a JSON 400 when they fail to parse.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct Query<T>(pub T);

/// JSON request body, rejected with a JSON 400 when missing or malformed.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);
