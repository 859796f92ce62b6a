//! Token verification.
//!
//! Every failure (malformed, expired, bad signature, wrong type) collapses
//! into `None`. The cause is only logged at debug level.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::de::DeserializeOwned;
use tracing::debug;

use staybook_core::config::AuthConfig;
use staybook_core::types::UserId;

use super::claims::{Claims, TokenType};

/// Validates tokens issued by [`JwtEncoder`](super::JwtEncoder).
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Checks signature, expiry and token type, returning the claims.
    pub fn verify<T: DeserializeOwned>(
        &self,
        token: &str,
        expected: TokenType,
    ) -> Option<Claims<T>> {
        let claims = match decode::<Claims<T>>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                debug!(error = %e, expected = ?expected, "Token rejected");
                return None;
            }
        };

        if claims.token_type != expected {
            debug!(found = ?claims.token_type, expected = ?expected, "Token type mismatch");
            return None;
        }

        Some(claims)
    }

    /// Verifies a refresh token and returns the user id it carries.
    pub fn verify_refresh_token(&self, token: &str) -> Option<UserId> {
        self.verify::<UserId>(token, TokenType::Refresh)
            .map(|claims| claims.data)
    }

    /// Verifies an access token and returns the refresh token it wraps.
    pub fn verify_access_token(&self, token: &str) -> Option<String> {
        self.verify::<String>(token, TokenType::Access)
            .map(|claims| claims.data)
    }

    /// Verifies an access token and then the refresh token inside it.
    /// Fails closed if either layer is invalid.
    pub fn resolve_user_id(&self, access_token: &str) -> Option<UserId> {
        let refresh_token = self.verify_access_token(access_token)?;
        self.verify_refresh_token(&refresh_token)
    }
}
