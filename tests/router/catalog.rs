use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use holocron_test_utils::prelude::*;
use serde_json::json;

use crate::util::{app, get, send};

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Expect each entry of the list to equal the single-entity lookup for its ID
#[tokio::test]
async fn list_matches_get_for_every_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet("Tatooine")
        .with_mock_planet("Naboo")
        .with_mock_person("Anakin Skywalker")
        .build()
        .await?;

    for collection in ["planets", "people"] {
        let (status, list) = send(app(&test), get(&format!("/{}", collection))).await;
        assert_eq!(status, StatusCode::OK);

        for entry in list.as_array().unwrap() {
            let uri = format!("/{}/{}", collection, entry["id"]);
            let (status, single) = send(app(&test), get(&uri)).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(&single, entry);
        }
    }

    Ok(())
}

/// Expect a JSON 400 rather than a plain-text rejection for non-integer IDs
#[tokio::test]
async fn non_integer_id_returns_json_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let (status, body) = send(app(&test), get("/planets/alderaan")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    Ok(())
}

/// Expect the favorite to keep the planet's name from when it was favorited
#[tokio::test]
async fn favorite_keeps_name_after_rename() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let planet = test.catalog().insert_mock_planet("Alderaan").await?;

    let (status, _) = send(
        app(&test),
        request(Method::POST, &format!("/favorite/planet/{}", planet.id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    test.catalog().rename_planet(planet, "Alderaan (destroyed)").await?;

    let (status, favorites) = send(app(&test), get("/users/1/favorites")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(favorites, json!([{ "id": 1, "name": "Alderaan" }]));

    Ok(())
}

/// Expect unfavorite to remove exactly one of several duplicates
#[tokio::test]
async fn unfavorite_removes_single_duplicate() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_person("Jar Jar Binks")
        .build()
        .await?;

    for _ in 0..3 {
        let (status, _) = send(app(&test), request(Method::POST, "/favorite/people/1")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, deleted) = send(app(&test), request(Method::DELETE, "/favorite/people/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["id"], 1);
    assert_eq!(test.favorite().count().await?, 2);

    Ok(())
}
