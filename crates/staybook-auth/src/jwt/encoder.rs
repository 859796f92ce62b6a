//! Token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use uuid::Uuid;

use staybook_core::config::AuthConfig;
use staybook_core::error::AppError;
use staybook_core::types::UserId;

use super::claims::{Claims, TokenType};

/// Creates signed refresh and access tokens (HS256).
#[derive(Debug, Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL.
    access_ttl: Duration,
    /// Refresh token TTL.
    refresh_ttl: Duration,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl: Duration::minutes(config.access_ttl_minutes as i64),
            refresh_ttl: Duration::days(config.refresh_ttl_days as i64),
        }
    }

    /// Issues a refresh token identifying `user_id`.
    pub fn issue_refresh_token(&self, user_id: UserId) -> Result<String, AppError> {
        self.issue_refresh_token_at(user_id, Utc::now())
    }

    /// Issues a refresh token as if signed at `issued_at`.
    pub fn issue_refresh_token_at(
        &self,
        user_id: UserId,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        self.sign(user_id, TokenType::Refresh, issued_at, self.refresh_ttl)
    }

    /// Issues an access token wrapping `refresh_token` verbatim.
    pub fn issue_access_token(&self, refresh_token: &str) -> Result<String, AppError> {
        self.issue_access_token_at(refresh_token, Utc::now())
    }

    /// Issues an access token as if signed at `issued_at`.
    pub fn issue_access_token_at(
        &self,
        refresh_token: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        self.sign(refresh_token, TokenType::Access, issued_at, self.access_ttl)
    }

    fn sign<T: Serialize>(
        &self,
        data: T,
        token_type: TokenType,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, AppError> {
        let claims = Claims {
            data,
            token_type,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
            jti: Uuid::new_v4(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode {token_type:?} token: {e}")))
    }
}
