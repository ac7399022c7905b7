use axum::{extract::State, http::StatusCode};
use holocron::server::{
    controller::{
        favorite::{
            favorite_person, favorite_planet, list_favorites, unfavorite_person,
            unfavorite_planet,
        },
        util::extract::Path,
    },
    model::app::AppState,
};
use holocron_test_utils::prelude::*;

use crate::util::{body_json, into_response};

mod list_favorites {
    use super::*;

    /// Expect every favorite to be listed whatever user ID the path names
    #[tokio::test]
    async fn ignores_user_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let planet = test.catalog().insert_mock_planet("Dagobah").await?;
        let person = test.catalog().insert_mock_person("Yoda").await?;
        test.favorite().insert_for_planet(&planet).await?;
        test.favorite().insert_for_person(&person).await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(list_favorites(State(state), Path(999)).await);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!([
                { "id": 1, "name": "Dagobah" },
                { "id": 2, "name": "Yoda" }
            ])
        );

        Ok(())
    }
}

mod favorite_planet {
    use super::*;

    #[tokio::test]
    async fn returns_new_favorite() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_planet("Coruscant")
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(favorite_planet(State(state), Path(1)).await);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({ "id": 1, "name": "Coruscant" })
        );

        Ok(())
    }

    /// Expect 404 & no favorite stored for an unknown planet
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(favorite_planet(State(state), Path(8)).await);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["message"], "Planet not found");
        assert_eq!(test.favorite().count().await?, 0);

        Ok(())
    }
}

mod favorite_person {
    use super::*;

    #[tokio::test]
    async fn returns_new_favorite() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_person("Boba Fett")
            .build()
            .await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(favorite_person(State(state), Path(1)).await);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["name"], "Boba Fett");

        Ok(())
    }

    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(favorite_person(State(state), Path(8)).await);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["message"], "Person not found");

        Ok(())
    }
}

mod unfavorite_planet {
    use super::*;

    /// Expect the deleted favorite in the body and the lowest ID duplicate removed
    #[tokio::test]
    async fn returns_deleted_favorite() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let planet = test.catalog().insert_mock_planet("Jakku").await?;
        test.favorite().insert_for_planet(&planet).await?;
        let remaining = test.favorite().insert_for_planet(&planet).await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(unfavorite_planet(State(state), Path(planet.id)).await);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({ "id": 1, "name": "Jakku" })
        );
        assert_eq!(test.favorite().all().await?, vec![remaining]);

        Ok(())
    }

    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(unfavorite_planet(State(state), Path(1)).await);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["message"], "Favorite planet not found");

        Ok(())
    }
}

mod unfavorite_person {
    use super::*;

    #[tokio::test]
    async fn returns_deleted_favorite() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let person = test.catalog().insert_mock_person("Rey").await?;
        test.favorite().insert_for_person(&person).await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(unfavorite_person(State(state), Path(person.id)).await);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["name"], "Rey");
        assert_eq!(test.favorite().count().await?, 0);

        Ok(())
    }

    /// Expect 404 & the collection unchanged when only a planet favorite shares the ID
    #[tokio::test]
    async fn returns_not_found() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let planet = test.catalog().insert_mock_planet("Scarif").await?;
        test.favorite().insert_for_planet(&planet).await?;
        let state: AppState = test.to_app_state();

        let resp = into_response(unfavorite_person(State(state), Path(planet.id)).await);

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["message"], "Favorite person not found");
        assert_eq!(test.favorite().count().await?, 1);

        Ok(())
    }
}
