//! Integration tests for booking creation, pricing and cancellation.

mod helpers;

use axum::http::StatusCode;
use helpers::{JANE, JOHN, SEED_PASSWORD, TestApp};
use serde_json::{Value, json};

fn stay(listing_id: u64, check_in: &str, check_out: &str, guests: u32) -> Value {
    json!({
        "listingId": listing_id,
        "checkIn": check_in,
        "checkOut": check_out,
        "guests": guests,
    })
}

#[tokio::test]
async fn test_bookings_require_bearer() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/bookings", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_own_bookings() {
    let app = TestApp::new().await;
    let session = app.sign_in(JANE, SEED_PASSWORD).await;

    let response = app
        .request("GET", "/api/bookings", None, Some(&session.access_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let bookings = response.body.as_array().expect("array");
    assert_eq!(bookings.len(), 2);
    assert!(bookings.iter().all(|b| b["userId"] == 1));
}

#[tokio::test]
async fn test_total_is_computed_server_side() {
    let app = TestApp::new().await;
    let session = app.sign_in(JANE, SEED_PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(json!({
                "listingId": 7,
                "checkIn": "2027-06-01",
                "checkOut": "2027-06-04",
                "guests": 2,
                "totalPrice": 1,
            })),
            Some(&session.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    // 3 nights × 110 = 330, fee 40, cleaning 50
    assert_eq!(response.body["totalPrice"], 420);
    assert_eq!(response.body["status"], "confirmed");
    assert_eq!(response.body["id"], 4);
}

#[tokio::test]
async fn test_three_nights_at_one_hundred() {
    let app = TestApp::new().await;
    let session = app.sign_in(JANE, SEED_PASSWORD).await;

    let listing = app
        .request(
            "POST",
            "/api/listings",
            Some(json!({
                "name": "Hundred a Night",
                "locationId": 1,
                "availability": { "from": "2025-01-01", "to": "2029-12-31" },
                "maxGuests": 2,
                "price": 100,
            })),
            Some(&session.access_token),
        )
        .await;
    let listing_id = listing.body["id"].as_u64().expect("listing id");

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(stay(listing_id, "2027-03-01", "2027-03-04", 1)),
            Some(&session.access_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["totalPrice"], 386);
}

#[tokio::test]
async fn test_huge_nightly_price_is_rejected() {
    let app = TestApp::new().await;
    let session = app.sign_in(JANE, SEED_PASSWORD).await;
    let token = Some(session.access_token.as_str());

    let listing = |price: u64| {
        json!({
            "name": "Gilded Suite",
            "locationId": 1,
            "availability": { "from": "2025-01-01", "to": "2029-12-31" },
            "maxGuests": 2,
            "price": price,
        })
    };

    let huge = app
        .request("POST", "/api/listings", Some(listing(u64::MAX / 2)), token)
        .await;
    assert_eq!(huge.status, StatusCode::BAD_REQUEST);

    let at_cap = app
        .request("POST", "/api/listings", Some(listing(1_000_000)), token)
        .await;
    assert_eq!(at_cap.status, StatusCode::OK);
    let listing_id = at_cap.body["id"].as_u64().expect("listing id");

    // A year at the cap still prices without overflow.
    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(stay(listing_id, "2027-01-01", "2028-01-01", 1)),
            token,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    // 365 000 000 base, 43 800 000 fee, 50 cleaning
    assert_eq!(response.body["totalPrice"], 408_800_050u64);
}

#[tokio::test]
async fn test_booking_validation() {
    let app = TestApp::new().await;
    let session = app.sign_in(JANE, SEED_PASSWORD).await;
    let token = Some(session.access_token.as_str());

    let crowded = app
        .request("POST", "/api/bookings", Some(stay(7, "2027-06-01", "2027-06-04", 3)), token)
        .await;
    assert_eq!(crowded.status, StatusCode::BAD_REQUEST);
    assert_eq!(crowded.message(), "Guests must be between 1 and 2");

    let inverted = app
        .request("POST", "/api/bookings", Some(stay(7, "2027-06-04", "2027-06-01", 1)), token)
        .await;
    assert_eq!(inverted.status, StatusCode::BAD_REQUEST);
    assert_eq!(inverted.message(), "Check-out must be after check-in");

    let unavailable = app
        .request("POST", "/api/bookings", Some(stay(7, "2031-06-01", "2031-06-04", 1)), token)
        .await;
    assert_eq!(unavailable.status, StatusCode::BAD_REQUEST);

    let missing = app
        .request("POST", "/api/bookings", Some(stay(99, "2027-06-01", "2027-06-04", 1)), token)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.message(), "Listing not found");
}

#[tokio::test]
async fn test_overlapping_stays_conflict() {
    let app = TestApp::new().await;
    let jane = app.sign_in(JANE, SEED_PASSWORD).await;
    let john = app.sign_in(JOHN, SEED_PASSWORD).await;

    let first = app
        .request(
            "POST",
            "/api/bookings",
            Some(stay(7, "2027-06-01", "2027-06-04", 2)),
            Some(&jane.access_token),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let overlapping = app
        .request(
            "POST",
            "/api/bookings",
            Some(stay(7, "2027-06-03", "2027-06-06", 1)),
            Some(&john.access_token),
        )
        .await;
    assert_eq!(overlapping.status, StatusCode::CONFLICT);

    let back_to_back = app
        .request(
            "POST",
            "/api/bookings",
            Some(stay(7, "2027-06-04", "2027-06-06", 1)),
            Some(&john.access_token),
        )
        .await;
    assert_eq!(back_to_back.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_cancel_by_other_user_is_not_found() {
    let app = TestApp::new().await;
    let jane = app.sign_in(JANE, SEED_PASSWORD).await;
    let john = app.sign_in(JOHN, SEED_PASSWORD).await;

    let created = app
        .request(
            "POST",
            "/api/bookings",
            Some(stay(7, "2027-06-01", "2027-06-04", 2)),
            Some(&jane.access_token),
        )
        .await;
    let id = created.body["id"].as_u64().expect("booking id");

    let response = app
        .request(
            "DELETE",
            &format!("/api/bookings/{id}"),
            None,
            Some(&john.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Booking not found or unauthorized");

    let listed = app
        .request("GET", "/api/bookings", None, Some(&jane.access_token))
        .await;
    let booking = listed
        .body
        .as_array()
        .expect("array")
        .iter()
        .find(|b| b["id"] == id)
        .cloned()
        .expect("booking still listed");
    assert_eq!(booking["status"], "confirmed");
}

#[tokio::test]
async fn test_cancel_frees_the_dates() {
    let app = TestApp::new().await;
    let jane = app.sign_in(JANE, SEED_PASSWORD).await;

    let created = app
        .request(
            "POST",
            "/api/bookings",
            Some(stay(7, "2027-06-01", "2027-06-04", 2)),
            Some(&jane.access_token),
        )
        .await;
    let id = created.body["id"].as_u64().expect("booking id");

    let cancelled = app
        .request(
            "DELETE",
            &format!("/api/bookings/{id}"),
            None,
            Some(&jane.access_token),
        )
        .await;
    assert_eq!(cancelled.status, StatusCode::OK);
    assert_eq!(cancelled.body["status"], "cancelled");

    let again = app
        .request(
            "DELETE",
            &format!("/api/bookings/{id}"),
            None,
            Some(&jane.access_token),
        )
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);

    let rebooked = app
        .request(
            "POST",
            "/api/bookings",
            Some(stay(7, "2027-06-01", "2027-06-04", 2)),
            Some(&jane.access_token),
        )
        .await;
    assert_eq!(rebooked.status, StatusCode::CREATED);
}
