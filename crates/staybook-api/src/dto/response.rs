//! Response DTOs.

use serde::{Deserialize, Serialize};

use staybook_entity::user::UserProfile;

/// Body of sign-in, sign-up, refresh and identity responses.
///
/// Both fields are null when authorization is disabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: Option<String>,
    pub user: Option<UserProfile>,
}

impl AuthResponse {
    /// Builds the body, blanking both fields when `use_auth` is false.
    pub fn new(use_auth: bool, access_token: String, user: UserProfile) -> Self {
        if use_auth {
            Self {
                access_token: Some(access_token),
                user: Some(user),
            }
        } else {
            Self {
                access_token: None,
                user: None,
            }
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status string.
    pub status: String,
    /// Server version.
    pub version: String,
}
