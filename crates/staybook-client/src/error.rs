//! Client error type.

use axum::http::StatusCode;
use thiserror::Error;

use staybook_core::types::response::ApiErrorResponse;

/// Message shown for failures the user cannot act on.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Failure of a client call, carrying the server's message where there is one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// 404 from the server.
    #[error("not found: {0}")]
    NotFound(String),
    /// 401 or 403 from the server.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// 400 or 409 from the server.
    #[error("validation failed: {0}")]
    Validation(String),
    /// The call was cancelled before it resolved.
    #[error("request aborted")]
    Aborted,
    /// Anything else, including transport and decoding failures.
    #[error("{0}")]
    Unknown(String),
}

impl ClientError {
    /// Classifies a non-success response.
    pub fn from_response(status: StatusCode, body: &serde_json::Value) -> Self {
        let message = serde_json::from_value::<ApiErrorResponse>(body.clone())
            .map(|e| e.message)
            .unwrap_or_else(|_| status.to_string());

        match status {
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized(message),
            StatusCode::BAD_REQUEST | StatusCode::CONFLICT => Self::Validation(message),
            _ => Self::Unknown(message),
        }
    }

    /// The text to put in front of the user; `None` for aborted calls.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::NotFound(m) | Self::Unauthorized(m) | Self::Validation(m) => Some(m.clone()),
            Self::Unknown(_) => Some(GENERIC_ERROR_MESSAGE.to_string()),
            Self::Aborted => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Unknown(format!("Failed to decode response: {err}"))
    }
}
