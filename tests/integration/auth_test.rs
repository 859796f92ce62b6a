//! Integration tests for the sign-in, refresh and identity flow.

mod helpers;

use axum::http::StatusCode;
use helpers::{JANE, SEED_PASSWORD, TestApp};

#[tokio::test]
async fn test_sign_in_success() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/signin",
            Some(serde_json::json!({ "email": JANE, "password": SEED_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["accessToken"].is_string());
    assert_eq!(response.body["user"]["email"], JANE);
    assert_eq!(response.body["user"]["initials"], "JD");
    assert!(response.body["user"].get("passwordHash").is_none());

    let cookie = response.set_cookie("refreshToken").expect("refresh cookie");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_sign_in_wrong_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/signin",
            Some(serde_json::json!({ "email": JANE, "password": "wrongpassword" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid credentials");
    assert!(response.set_cookie("refreshToken").is_none());
}

#[tokio::test]
async fn test_sign_in_unknown_email() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/signin",
            Some(serde_json::json!({ "email": "nobody@example.com", "password": SEED_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid credentials");
}

#[tokio::test]
async fn test_sign_up_duplicate_email() {
    let app = TestApp::new().await;
    let body = serde_json::json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "a@x.com",
        "password": "correct-horse",
    });

    let first = app.request("POST", "/api/signup", Some(body.clone()), None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["user"]["initials"], "AL");
    assert_eq!(first.body["user"]["id"], 4);

    let second = app.request("POST", "/api/signup", Some(body), None).await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        second.message(),
        "An account with this email already exists"
    );
}

#[tokio::test]
async fn test_sign_up_rejects_short_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/signup",
            Some(serde_json::json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "password": "short",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_requires_bearer() {
    let app = TestApp::new().await;

    let missing = app.request("GET", "/api/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.message(), "Unauthorized");

    let garbage = app.request("GET", "/api/me", None, Some("not-a-token")).await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_echoes_access_token() {
    let app = TestApp::new().await;
    let session = app.sign_in(JANE, SEED_PASSWORD).await;

    let response = app
        .request("GET", "/api/me", None, Some(&session.access_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["accessToken"], session.access_token.as_str());
    assert_eq!(response.body["user"]["id"], 1);
}

#[tokio::test]
async fn test_refresh_token_is_not_a_bearer() {
    let app = TestApp::new().await;
    let session = app.sign_in(JANE, SEED_PASSWORD).await;

    let response = app
        .request("GET", "/api/me", None, Some(&session.refresh_token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_mints_usable_access_token() {
    let app = TestApp::new().await;
    let session = app.sign_in(JANE, SEED_PASSWORD).await;

    let refreshed = app
        .request_with_cookie("GET", "/api/refreshToken", &session.refresh_token)
        .await;
    assert_eq!(refreshed.status, StatusCode::OK);
    assert_eq!(refreshed.body["user"]["email"], JANE);

    let token = refreshed.body["accessToken"].as_str().expect("access token");
    let me = app.request("GET", "/api/me", None, Some(token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["user"]["id"], 1);
}

#[tokio::test]
async fn test_refresh_without_cookie() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/refreshToken", None, None).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.message(), "Invalid refresh token");

    let forged = app
        .request_with_cookie("GET", "/api/refreshToken", "forged.token.value")
        .await;
    assert_eq!(forged.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_sign_out_clears_cookie() {
    let app = TestApp::new().await;
    let session = app.sign_in(JANE, SEED_PASSWORD).await;

    let anonymous = app.request("POST", "/api/signout", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let cookie = format!("refreshToken={}", session.refresh_token);
    let response = app
        .send(
            "POST",
            "/api/signout",
            None,
            Some(&session.access_token),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Signed out");

    let cookie = response.set_cookie("refreshToken").expect("removal cookie");
    assert!(cookie.starts_with("refreshToken=;"));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_disabled_auth_returns_null_tokens() {
    let mut config = helpers::test_config();
    config.auth.use_auth = false;
    let app = TestApp::with_config(config).await;

    let response = app
        .request(
            "POST",
            "/api/signin",
            Some(serde_json::json!({ "email": JANE, "password": SEED_PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["accessToken"].is_null());
    assert!(response.body["user"].is_null());

    let sign_out = app.request("POST", "/api/signout", None, None).await;
    assert_eq!(sign_out.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
