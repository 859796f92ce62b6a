//! Integration tests for listing lookup, search and creation.

mod helpers;

use axum::http::StatusCode;
use helpers::{JANE, SEED_PASSWORD, TestApp};
use serde_json::{Value, json};

fn ids(body: &Value) -> Vec<u64> {
    body.as_array()
        .expect("array body")
        .iter()
        .filter_map(|l| l["id"].as_u64())
        .collect()
}

fn new_listing(location_id: u64) -> Value {
    json!({
        "name": "Quiet Garden Flat",
        "description": "Ground floor with a small garden.",
        "locationId": location_id,
        "images": [],
        "availability": { "from": "2025-01-01", "to": "2029-12-31" },
        "maxGuests": 3,
        "price": 100,
    })
}

#[tokio::test]
async fn test_get_listing_embeds_location() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/listings/1", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Alfama Rooftop Loft");
    assert_eq!(response.body["maxGuests"], 2);
    assert_eq!(response.body["location"]["name"], "Lisbon");
}

#[tokio::test]
async fn test_get_listing_errors() {
    let app = TestApp::new().await;

    let missing = app.request("GET", "/api/listings/999", None, None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.message(), "Listing not found");

    let malformed = app.request("GET", "/api/listings/abc", None, None).await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_filters() {
    let app = TestApp::new().await;

    let all = app.request("GET", "/api/listings", None, None).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(ids(&all.body).len(), 8);

    let large = app.request("GET", "/api/listings?guests=6", None, None).await;
    assert_eq!(ids(&large.body), vec![5, 8]);

    let cabin = app.request("GET", "/api/listings?search=CABIN", None, None).await;
    assert_eq!(ids(&cabin.body), vec![8]);

    let inside = app
        .request("GET", "/api/listings?from=2026-05-01&to=2026-05-08", None, None)
        .await;
    assert_eq!(ids(&inside.body).len(), 8);

    let outside = app
        .request("GET", "/api/listings?from=2031-01-01&to=2031-01-05", None, None)
        .await;
    assert!(ids(&outside.body).is_empty());
}

#[tokio::test]
async fn test_search_rejects_bad_dates() {
    let app = TestApp::new().await;

    let half = app.request("GET", "/api/listings?from=2026-05-01", None, None).await;
    assert_eq!(half.status, StatusCode::BAD_REQUEST);

    let inverted = app
        .request("GET", "/api/listings?from=2026-05-08&to=2026-05-01", None, None)
        .await;
    assert_eq!(inverted.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_featured_is_top_six_by_rating() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/listings/featured", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids(&response.body), vec![3, 8, 1, 5, 4, 2]);
}

#[tokio::test]
async fn test_public_listings_limit() {
    let app = TestApp::new().await;

    let default = app.request("GET", "/api/listings/public", None, None).await;
    assert_eq!(ids(&default.body).len(), 8);

    let limited = app
        .request("GET", "/api/listings/public?limit=3", None, None)
        .await;
    assert_eq!(ids(&limited.body), vec![1, 2, 3]);

    let searched = app
        .request("GET", "/api/listings/public?search=house", None, None)
        .await;
    assert_eq!(ids(&searched.body), vec![3]);
}

#[tokio::test]
async fn test_create_listing_requires_bearer() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/listings", Some(new_listing(1)), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Unauthorized");
}

#[tokio::test]
async fn test_create_listing_owned_by_caller() {
    let app = TestApp::new().await;
    let session = app.sign_in(JANE, SEED_PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/listings",
            Some(new_listing(2)),
            Some(&session.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], 9);
    assert_eq!(response.body["userId"], 1);

    let fetched = app.request("GET", "/api/listings/9", None, None).await;
    assert_eq!(fetched.body["location"]["name"], "Kyoto");
}

#[tokio::test]
async fn test_create_listing_unknown_location() {
    let app = TestApp::new().await;
    let session = app.sign_in(JANE, SEED_PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/listings",
            Some(new_listing(99)),
            Some(&session.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Location not found");
}
