//! Request/response types and the transport seam.
//!
//! [`RouterTransport`] serves every request from an axum [`Router`] in the
//! same process, keeping a cookie jar the way a browser would.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, StatusCode, header};
use axum_extra::extract::cookie::Cookie;
use dashmap::DashMap;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tower::ServiceExt;
use tracing::debug;

use staybook_core::config::ClientConfig;
use staybook_core::error::UNAUTHORIZED_MESSAGE;

use crate::error::ClientError;

/// An outgoing API call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub bearer: Option<String>,
    /// Set on the single resend after a token refresh.
    pub is_retry: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
            is_retry: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// The resend of this request carrying a freshly issued token.
    pub fn into_retry(self, access_token: String) -> Self {
        Self {
            bearer: Some(access_token),
            is_retry: true,
            ..self
        }
    }

    /// Path plus percent-encoded query string.
    pub fn uri(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }

        let query = self
            .query
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, NON_ALPHANUMERIC),
                    utf8_percent_encode(v, NON_ALPHANUMERIC)
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.path, query)
    }
}

/// A decoded API response. Empty bodies decode to `null`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// A bearer rejection: 401 or 403 carrying the "Unauthorized" message.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
            && self.body.get("message").and_then(|m| m.as_str()) == Some(UNAUTHORIZED_MESSAGE)
    }

    /// Converts a non-success response into its [`ClientError`].
    pub fn into_result(self) -> Result<serde_json::Value, ClientError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(ClientError::from_response(self.status, &self.body))
        }
    }
}

/// Something that can carry an [`ApiRequest`] to the API.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

/// Calls the router directly, with an optional artificial delay.
#[derive(Clone)]
pub struct RouterTransport {
    router: Router,
    cookies: Arc<DashMap<String, String>>,
    latency: Duration,
}

impl RouterTransport {
    pub fn new(router: Router, config: &ClientConfig) -> Self {
        Self {
            router,
            cookies: Arc::new(DashMap::new()),
            latency: Duration::from_millis(config.simulated_latency_ms),
        }
    }

    /// Current value of a stored cookie.
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.get(name).map(|v| v.value().clone())
    }

    fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self
            .cookies
            .iter()
            .map(|entry| format!("{}={}", entry.key(), entry.value()))
            .collect();
        Some(pairs.join("; "))
    }

    fn store_cookies(&self, headers: &axum::http::HeaderMap) {
        for value in headers.get_all(header::SET_COOKIE) {
            let Ok(raw) = value.to_str() else {
                continue;
            };
            let Ok(cookie) = Cookie::parse(raw.to_string()) else {
                debug!(raw, "Ignoring malformed Set-Cookie header");
                continue;
            };

            let removed =
                cookie.value().is_empty() || cookie.max_age().is_some_and(|age| age.is_zero());
            if removed {
                self.cookies.remove(cookie.name());
            } else {
                self.cookies
                    .insert(cookie.name().to_string(), cookie.value().to_string());
            }
        }
    }

    fn build_request(&self, request: &ApiRequest) -> Result<Request<Body>, ClientError> {
        let mut builder = Request::builder()
            .method(request.method.clone())
            .uri(request.uri());

        if let Some(token) = &request.bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(cookies) = self.cookie_header() {
            let value = HeaderValue::from_str(&cookies)
                .map_err(|e| ClientError::Unknown(format!("Invalid cookie header: {e}")))?;
            builder = builder.header(header::COOKIE, value);
        }

        let body = match &request.body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(json)?)
            }
            None => Body::empty(),
        };

        builder
            .body(body)
            .map_err(|e| ClientError::Unknown(format!("Invalid request: {e}")))
    }
}

#[async_trait]
impl Transport for RouterTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let http_request = self.build_request(&request)?;
        let response = self
            .router
            .clone()
            .oneshot(http_request)
            .await
            .map_err(|e| ClientError::Unknown(e.to_string()))?;

        let status = response.status();
        self.store_cookies(response.headers());

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Unknown(format!("Failed to read response: {e}")))?;
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        debug!(method = %request.method, path = %request.path, status = status.as_u16(), "API call");
        Ok(ApiResponse { status, body })
    }
}
