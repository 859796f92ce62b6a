//! Bearer gating extractors.
//!
//! [`RequireBearer`] only checks that the bearer verifies as an access
//! token and rejects with 401. [`AuthUser`] additionally resolves the user
//! id through the wrapped refresh token and rejects with 403 when that
//! fails. Both reject with the message `"Unauthorized"`.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use staybook_core::error::{AppError, UNAUTHORIZED_MESSAGE};
use staybook_service::context::RequestContext;

use crate::state::AppState;

/// Returns the second space-separated segment of the Authorization header.
pub fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(' ').nth(1))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Passes when the bearer verifies, or when authorization is disabled.
/// Carries the raw bearer, if any.
#[derive(Debug, Clone)]
pub struct RequireBearer(pub Option<String>);

impl FromRequestParts<AppState> for RequireBearer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts);
        let manager = &state.session_manager;

        if manager.use_auth() {
            let verified = token
                .as_deref()
                .and_then(|t| manager.decoder().verify_access_token(t))
                .is_some();
            if !verified {
                debug!(path = %parts.uri.path(), "Bearer rejected");
                return Err(AppError::unauthorized(UNAUTHORIZED_MESSAGE));
            }
        }

        Ok(RequireBearer(token))
    }
}

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireBearer(token) = RequireBearer::from_request_parts(parts, state).await?;

        let user_id = token
            .as_deref()
            .and_then(|t| state.session_manager.decoder().resolve_user_id(t))
            .ok_or_else(|| {
                debug!(path = %parts.uri.path(), "Caller identity unresolved");
                AppError::forbidden(UNAUTHORIZED_MESSAGE)
            })?;

        Ok(AuthUser(RequestContext::new(user_id)))
    }
}
