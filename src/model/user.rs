use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Serialized user.
///
/// The password hash and active flag never leave the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub first_name: Option<String>,
    pub email: Option<String>,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            email: user.email,
        }
    }
}

/// Body of a user creation request.
///
/// Every field is optional at the wire level so that missing fields produce a descriptive 400
/// rather than a deserialization rejection.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Credentials for requesting a bearer token
#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TokenParams {
    /// The user's email address
    pub username: Option<String>,
    pub password: Option<String>,
}

/// A freshly issued bearer token
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
    pub user_id: i32,
}

/// Identity of the bearer of a valid token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProtectedDto {
    pub id: i32,
    pub username: Option<String>,
}
