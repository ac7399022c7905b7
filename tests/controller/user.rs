use axum::{extract::State, http::StatusCode};
use holocron::{
    model::user::CreateUserDto,
    server::{
        controller::{
            user::{create_user, list_users},
            util::extract::JsonBody,
        },
        model::app::AppState,
    },
};
use holocron_test_utils::prelude::*;

use crate::util::{body_json, into_response};

mod list_users {
    use super::*;

    /// Expect users to be serialized without password or active flag
    #[tokio::test]
    async fn omits_password() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user("mando@mandalore.org", "this is the way")
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(list_users(State(state)).await);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!([
                { "id": 1, "first_name": "Test", "email": "mando@mandalore.org" }
            ])
        );

        Ok(())
    }
}

mod create_user {
    use super::*;

    fn request(email: Option<&str>, password: Option<&str>) -> CreateUserDto {
        CreateUserDto {
            first_name: Some("Din".to_string()),
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn returns_created() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(
            create_user(
                State(state),
                JsonBody(request(Some("din@mandalore.org"), Some("beskar"))),
            )
            .await,
        );

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(resp).await["message"],
            "User created successfully"
        );
        assert_eq!(test.user().count().await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn returns_bad_request_without_password() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(
            create_user(State(state), JsonBody(request(Some("din@mandalore.org"), None))).await,
        );

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await["message"],
            "Email and password are required"
        );
        assert_eq!(test.user().count().await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn returns_bad_request_for_duplicate_email() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user("din@mandalore.org", "beskar")
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(
            create_user(
                State(state),
                JsonBody(request(Some("din@mandalore.org"), Some("other"))),
            )
            .await,
        );

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["message"], "Email already registered");
        assert_eq!(test.user().count().await?, 1);

        Ok(())
    }
}
