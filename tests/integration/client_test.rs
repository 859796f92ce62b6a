//! End-to-end tests of the client against the in-process router.

mod helpers;

use std::sync::Arc;

use helpers::{JANE, JOHN, SEED_PASSWORD, TestApp};
use serde_json::json;
use tokio_util::sync::CancellationToken;

use staybook_client::{
    ApiClient, ClientError, Fetcher, RouterTransport, SessionPhase, SignUpForm,
};
use staybook_core::config::ClientConfig;
use staybook_core::types::ListingId;
use staybook_entity::booking::Booking;
use staybook_entity::listing::ListingWithLocation;

async fn transport() -> Arc<RouterTransport> {
    let app = TestApp::new().await;
    Arc::new(RouterTransport::new(app.router, &ClientConfig::default()))
}

#[tokio::test]
async fn test_identity_check_without_cookie_is_anonymous() {
    let client = ApiClient::new(transport().await);

    assert_eq!(client.phase().await, SessionPhase::Unknown);
    assert_eq!(client.identity_check().await, SessionPhase::Anonymous);
    assert!(client.access_token().await.is_none());
}

#[tokio::test]
async fn test_sign_in_then_fetch_bookings() {
    let client = ApiClient::new(transport().await);
    client.identity_check().await;

    let payload = client.sign_in(JANE, SEED_PASSWORD).await.unwrap();
    assert!(payload.access_token.is_some());
    assert_eq!(client.phase().await, SessionPhase::Authenticated);
    assert_eq!(client.user().await.map(|u| u.email).as_deref(), Some(JANE));

    let bookings: Vec<Booking> = client.get("/api/bookings", Vec::new()).await.unwrap();
    assert_eq!(bookings.len(), 2);
}

#[tokio::test]
async fn test_sign_in_before_identity_check_keeps_token() {
    let client = ApiClient::new(transport().await);
    assert_eq!(client.phase().await, SessionPhase::Unknown);

    let payload = client.sign_in(JANE, SEED_PASSWORD).await.unwrap();
    assert_eq!(client.phase().await, SessionPhase::Authenticated);
    assert_eq!(client.access_token().await, payload.access_token);

    let bookings: Vec<Booking> = client.get("/api/bookings", Vec::new()).await.unwrap();
    assert_eq!(bookings.len(), 2);
}

#[tokio::test]
async fn test_signing_in_as_another_user_replaces_session() {
    let transport = transport().await;
    let client = ApiClient::new(transport.clone());
    client.identity_check().await;
    client.sign_in(JANE, SEED_PASSWORD).await.unwrap();

    let payload = client.sign_in(JOHN, SEED_PASSWORD).await.unwrap();
    assert_eq!(client.access_token().await, payload.access_token);
    assert_eq!(client.user().await.map(|u| u.email).as_deref(), Some(JOHN));

    // The refresh cookie and the held session name the same user.
    let reloaded = ApiClient::new(transport);
    assert_eq!(reloaded.identity_check().await, SessionPhase::Authenticated);
    assert_eq!(reloaded.user().await.map(|u| u.email).as_deref(), Some(JOHN));
}

#[tokio::test]
async fn test_reload_restores_session_from_refresh_cookie() {
    let transport = transport().await;
    let first = ApiClient::new(transport.clone());
    first.identity_check().await;
    first.sign_in(JANE, SEED_PASSWORD).await.unwrap();
    assert!(transport.cookie("refreshToken").is_some());

    // A new client has no access token; /api/me is rejected, the
    // interceptor refreshes from the cookie and retries once.
    let reloaded = ApiClient::new(transport.clone());
    assert_eq!(reloaded.identity_check().await, SessionPhase::Authenticated);
    assert!(reloaded.access_token().await.is_some());
    assert_eq!(reloaded.user().await.map(|u| u.first_name).as_deref(), Some("Jane"));
}

#[tokio::test]
async fn test_sign_out_clears_cookie_and_session() {
    let transport = transport().await;
    let client = ApiClient::new(transport.clone());
    client.identity_check().await;
    client.sign_in(JANE, SEED_PASSWORD).await.unwrap();

    client.sign_out().await.unwrap();
    assert_eq!(client.phase().await, SessionPhase::Anonymous);
    assert!(transport.cookie("refreshToken").is_none());

    let reloaded = ApiClient::new(transport);
    assert_eq!(reloaded.identity_check().await, SessionPhase::Anonymous);
}

#[tokio::test]
async fn test_duplicate_sign_up_surfaces_message() {
    let client = ApiClient::new(transport().await);
    client.identity_check().await;
    let form = SignUpForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "a@x.com".into(),
        password: "correct-horse".into(),
    };

    client.sign_up(&form).await.unwrap();
    client.sign_out().await.unwrap();

    let err = client.sign_up(&form).await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Validation("An account with this email already exists".into())
    );
    assert_eq!(
        err.user_message().as_deref(),
        Some("An account with this email already exists")
    );
    assert_eq!(client.phase().await, SessionPhase::Anonymous);
}

#[tokio::test]
async fn test_protected_call_without_session_fails_once() {
    let client = ApiClient::new(transport().await);
    client.identity_check().await;

    let err = client
        .post::<_, serde_json::Value>(
            "/api/reviews",
            &json!({ "listingId": 3, "rating": 5, "comment": "" }),
        )
        .await
        .unwrap_err();
    assert_eq!(err, ClientError::Unauthorized("Unauthorized".into()));
    assert_eq!(client.phase().await, SessionPhase::Anonymous);
}

#[tokio::test]
async fn test_favorites_need_a_session() {
    let client = ApiClient::new(transport().await);
    client.identity_check().await;

    let err = client.toggle_favorite(ListingId(3)).await.unwrap_err();
    assert_eq!(err, ClientError::Unauthorized("Unauthorized".into()));
    assert!(!client.is_favorite(ListingId(3)).await);

    client.sign_in(JANE, SEED_PASSWORD).await.unwrap();
    assert!(client.toggle_favorite(ListingId(3)).await.unwrap());
    assert!(client.toggle_favorite(ListingId(5)).await.unwrap());
    assert!(!client.toggle_favorite(ListingId(5)).await.unwrap());

    let listings: Vec<ListingWithLocation> =
        client.get("/api/listings", Vec::new()).await.unwrap();
    let favorites = client.favorite_listings(&listings).await;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].listing.id, ListingId(3));
}

#[tokio::test]
async fn test_fetcher_caches_and_aborts() {
    let client = ApiClient::new(transport().await);
    let fetcher = Fetcher::new(client, &ClientConfig::default());
    let params = json!({ "search": "loft" });

    let live = CancellationToken::new();
    let listings: Vec<ListingWithLocation> = fetcher
        .fetch("/api/listings", &params, &live)
        .await
        .unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].location.name, "Lisbon");

    let cancelled = CancellationToken::new();
    cancelled.cancel();
    let other = json!({ "search": "villa" });
    let aborted = fetcher
        .fetch::<_, Vec<ListingWithLocation>>("/api/listings", &other, &cancelled)
        .await;
    assert_eq!(aborted.unwrap_err(), ClientError::Aborted);

    // Cached entries are served even to an already-cancelled caller.
    let cached: Vec<ListingWithLocation> = fetcher
        .fetch("/api/listings", &params, &cancelled)
        .await
        .unwrap();
    assert_eq!(cached.len(), 1);
}
