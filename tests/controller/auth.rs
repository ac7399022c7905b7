use axum::{extract::State, http::StatusCode};
use holocron::{
    model::user::TokenParams,
    server::{
        controller::{
            auth::{issue_token, protected},
            util::{bearer::BearerUser, extract::Query},
        },
        model::app::AppState,
    },
};
use holocron_test_utils::prelude::*;

use crate::util::{body_json, into_response};

fn params(username: &str, password: &str) -> TokenParams {
    TokenParams {
        username: Some(username.to_string()),
        password: Some(password.to_string()),
    }
}

mod issue_token {
    use super::*;

    #[tokio::test]
    async fn returns_token_for_valid_credentials() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user("ahsoka@tano.net", "snips")
            .build()
            .await?;
        let state: AppState = test.to_app_state();
        let tokens = state.tokens.clone();

        let resp = into_response(
            issue_token(State(state), Query(params("ahsoka@tano.net", "snips"))).await,
        );

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["user_id"], 1);
        let claims = tokens.verify(body["token"].as_str().unwrap()).unwrap();
        assert_eq!(claims.sub, "1");

        Ok(())
    }

    /// Expect 401 & no token for a wrong password
    #[tokio::test]
    async fn returns_unauthorized_for_wrong_password() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user("ahsoka@tano.net", "snips")
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(
            issue_token(State(state), Query(params("ahsoka@tano.net", "skyguy"))).await,
        );

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(resp).await;
        assert_eq!(body["message"], "Bad username or password");
        assert!(body.get("token").is_none());

        Ok(())
    }
}

mod protected {
    use super::*;

    #[tokio::test]
    async fn returns_identity() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_user("ahsoka@tano.net", "snips")
            .build()
            .await?;
        let state: AppState = test.to_app_state();
        let token = state.tokens.issue(1, None).unwrap();
        let claims = state.tokens.verify(&token).unwrap();

        let resp = into_response(protected(State(state), BearerUser(claims)).await);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({ "id": 1, "username": "ahsoka@tano.net" })
        );

        Ok(())
    }

    /// Expect 401 when the token's user no longer exists
    #[tokio::test]
    async fn returns_unauthorized_for_deleted_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let state: AppState = test.to_app_state();
        let token = state.tokens.issue(12, None).unwrap();
        let claims = state.tokens.verify(&token).unwrap();

        let resp = into_response(protected(State(state), BearerUser(claims)).await);

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
