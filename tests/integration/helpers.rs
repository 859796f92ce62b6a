//! Shared test helpers for integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use staybook_api::{AppState, build_app, build_state};
use staybook_core::config::AppConfig;

/// Password of every seeded user.
pub const SEED_PASSWORD: &str = "password123";
pub const JANE: &str = "jane.doe@example.com";
pub const JOHN: &str = "john.smith@example.com";
pub const MARIA: &str = "maria.garcia@example.com";

/// In-memory store, cheap password hashing, fixed secret.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config.auth.argon2_memory_kib = 8;
    config.auth.argon2_iterations = 1;
    config
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state, for direct service access
    pub state: AppState,
}

/// Tokens handed out by a successful sign-in.
#[derive(Debug, Clone)]
pub struct TestSession {
    pub access_token: String,
    pub refresh_token: String,
}

impl TestApp {
    /// Create a new test application over a freshly seeded store
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let state = build_state(config, false)
            .await
            .expect("Failed to build application state");
        let router = build_app(state.clone());
        Self { router, state }
    }

    /// Sign in and return the access token and refresh cookie value
    pub async fn sign_in(&self, email: &str, password: &str) -> TestSession {
        let response = self
            .request(
                "POST",
                "/api/signin",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Sign-in failed: {:?}",
            response.body
        );

        let access_token = response.body["accessToken"]
            .as_str()
            .expect("No accessToken in sign-in response")
            .to_string();
        let refresh_token = response
            .cookie("refreshToken")
            .expect("No refresh cookie in sign-in response");

        TestSession {
            access_token,
            refresh_token,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        self.send(method, path, body, token, None).await
    }

    /// Make an HTTP request carrying a `refreshToken` cookie
    pub async fn request_with_cookie(
        &self,
        method: &str,
        path: &str,
        refresh_token: &str,
    ) -> TestResponse {
        let cookie = format!("refreshToken={refresh_token}");
        self.send(method, path, None, None, Some(&cookie)).await
    }

    /// Make an HTTP request with any combination of body, bearer and raw cookie header
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `message` field of the body
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }

    /// Raw `Set-Cookie` header for `name`, if any
    pub fn set_cookie(&self, name: &str) -> Option<String> {
        let prefix = format!("{name}=");
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with(&prefix))
            .map(str::to_string)
    }

    /// Value of the cookie `name` set by this response
    pub fn cookie(&self, name: &str) -> Option<String> {
        let raw = self.set_cookie(name)?;
        let pair = raw.split(';').next()?;
        pair.split_once('=').map(|(_, v)| v.to_string())
    }
}
