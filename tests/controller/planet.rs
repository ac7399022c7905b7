use axum::{extract::State, http::StatusCode};
use holocron::server::{
    controller::{
        planet::{get_planet, list_planets},
        util::extract::Path,
    },
    model::app::AppState,
};
use holocron_test_utils::prelude::*;

use crate::util::{body_json, into_response};

mod list_planets {
    use super::*;

    #[tokio::test]
    async fn returns_planets_in_id_order() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_planet("Tatooine")
            .with_mock_planet("Alderaan")
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(list_planets(State(state)).await);

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Tatooine", "Alderaan"]);

        Ok(())
    }
}

mod get_planet {
    use super::*;

    /// Expect the full planet field set
    #[tokio::test]
    async fn returns_planet() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_planet("Tatooine")
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(get_planet(State(state), Path(1)).await);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({
                "id": 1,
                "name": "Tatooine",
                "climate": "arid",
                "gravity": 1,
                "orbital_period": 304,
                "population": 200000
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(get_planet(State(state), Path(3)).await);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["message"], "Planet not found");

        Ok(())
    }
}
