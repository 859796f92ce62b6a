//! Integration tests for review listing and author-only edits.

mod helpers;

use axum::http::StatusCode;
use helpers::{JANE, JOHN, MARIA, SEED_PASSWORD, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_list_reviews_in_insertion_order() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/reviews?listingId=3", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let reviews = response.body.as_array().expect("array");
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0]["userId"], 1);
    assert_eq!(reviews[1]["userId"], 2);
}

#[tokio::test]
async fn test_list_reviews_requires_listing_id() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/reviews", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "listingId is required");
}

#[tokio::test]
async fn test_create_review_once_per_listing() {
    let app = TestApp::new().await;
    let maria = app.sign_in(MARIA, SEED_PASSWORD).await;
    let body = json!({ "listingId": 3, "rating": 4, "comment": "Lovely tatami rooms." });

    let created = app
        .request("POST", "/api/reviews", Some(body.clone()), Some(&maria.access_token))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["id"], 5);
    assert_eq!(created.body["userId"], 3);

    let duplicate = app
        .request("POST", "/api/reviews", Some(body), Some(&maria.access_token))
        .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
    assert_eq!(duplicate.message(), "You have already reviewed this listing");

    let listed = app.request("GET", "/api/reviews?listingId=3", None, None).await;
    assert_eq!(listed.body.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_create_review_validation() {
    let app = TestApp::new().await;
    let maria = app.sign_in(MARIA, SEED_PASSWORD).await;

    let out_of_range = app
        .request(
            "POST",
            "/api/reviews",
            Some(json!({ "listingId": 3, "rating": 6, "comment": "" })),
            Some(&maria.access_token),
        )
        .await;
    assert_eq!(out_of_range.status, StatusCode::BAD_REQUEST);

    let missing_listing = app
        .request(
            "POST",
            "/api/reviews",
            Some(json!({ "listingId": 99, "rating": 4, "comment": "" })),
            Some(&maria.access_token),
        )
        .await;
    assert_eq!(missing_listing.status, StatusCode::NOT_FOUND);

    let anonymous = app
        .request(
            "POST",
            "/api/reviews",
            Some(json!({ "listingId": 3, "rating": 4, "comment": "" })),
            None,
        )
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_by_non_author_is_not_found() {
    let app = TestApp::new().await;
    let john = app.sign_in(JOHN, SEED_PASSWORD).await;

    let response = app
        .request(
            "PUT",
            "/api/reviews/1",
            Some(json!({ "rating": 1 })),
            Some(&john.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Review not found or unauthorized");

    let deleted = app
        .request("DELETE", "/api/reviews/1", None, Some(&john.access_token))
        .await;
    assert_eq!(deleted.status, StatusCode::NOT_FOUND);

    let listed = app.request("GET", "/api/reviews?listingId=3", None, None).await;
    assert_eq!(listed.body[0]["id"], 1);
    assert_eq!(listed.body[0]["rating"], 5);
}

#[tokio::test]
async fn test_author_updates_and_deletes() {
    let app = TestApp::new().await;
    let jane = app.sign_in(JANE, SEED_PASSWORD).await;

    let updated = app
        .request(
            "PUT",
            "/api/reviews/1",
            Some(json!({ "comment": "Still thinking about that garden." })),
            Some(&jane.access_token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["rating"], 5);
    assert_eq!(updated.body["comment"], "Still thinking about that garden.");

    let deleted = app
        .request("DELETE", "/api/reviews/1", None, Some(&jane.access_token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.message(), "Review deleted");

    let listed = app.request("GET", "/api/reviews?listingId=3", None, None).await;
    let remaining: Vec<u64> = listed
        .body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|r| r["id"].as_u64())
        .collect();
    assert_eq!(remaining, vec![2]);
}
