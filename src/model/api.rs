use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
}

/// A plain confirmation message
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// A single registered route
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RouteDto {
    /// HTTP method in upper case, e.g. `GET`
    pub method: String,
    /// Route path with `{param}` placeholders
    pub path: String,
}

/// Every route registered on the API
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RouteMapDto {
    pub routes: Vec<RouteDto>,
}
