use axum::{extract::State, http::StatusCode};
use holocron::server::{
    controller::{
        people::{get_person, list_people},
        util::extract::Path,
    },
    model::app::AppState,
};
use holocron_test_utils::prelude::*;

use crate::util::{body_json, into_response};

mod list_people {
    use super::*;

    /// Expect 200 with an empty array when no people are stored
    #[tokio::test]
    async fn returns_empty_list() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(list_people(State(state)).await);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, serde_json::json!([]));

        Ok(())
    }

    /// Expect people to be serialized without their eye color
    #[tokio::test]
    async fn omits_eye_color() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_person("Luke Skywalker")
            .with_mock_person("Darth Vader")
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(list_people(State(state)).await);

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        let people = body.as_array().unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0]["name"], "Luke Skywalker");
        assert!(people[0].get("eye_color").is_none());

        Ok(())
    }

    /// Expect 500 when the people table is missing
    #[tokio::test]
    async fn fails_when_tables_missing() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(list_people(State(state)).await);

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await["message"], "Internal server error");

        Ok(())
    }
}

mod get_person {
    use super::*;

    #[tokio::test]
    async fn returns_person() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_person("Leia Organa")
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(get_person(State(state), Path(1)).await);

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Leia Organa");
        assert_eq!(body["height"], 172);

        Ok(())
    }

    /// Expect 404 with a JSON message for an unknown ID
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(get_person(State(state), Path(42)).await);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["message"], "Person not found");

        Ok(())
    }
}
