//! Claims carried by refresh and access tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload embedded in every token.
///
/// A refresh token carries the user id as `data`; an access token carries
/// the refresh token string it was minted from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims<T> {
    /// Token payload.
    pub data: T,
    /// Token type: "access" or "refresh".
    pub token_type: TokenType,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token id.
    pub jti: Uuid,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived bearer credential.
    Access,
    /// Long-lived credential used only to mint access tokens.
    Refresh,
}
