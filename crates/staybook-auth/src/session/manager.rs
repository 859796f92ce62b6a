//! Session lifecycle manager: sign-in, sign-up, refresh and identify.
//!
//! A refresh token identifies the user and is handed to the HTTP layer to
//! be stored in a cookie. Access tokens are minted from it and carry it as
//! their payload, so resolving a caller always verifies both layers.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info, warn};

use staybook_core::config::AuthConfig;
use staybook_core::error::{AppError, UNAUTHORIZED_MESSAGE};
use staybook_core::traits::Repository;
use staybook_core::types::UserId;
use staybook_database::repositories::UserRepository;
use staybook_entity::user::{CreateUser, User, UserProfile};

use crate::jwt::{JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const INVALID_REFRESH_TOKEN: &str = "Invalid refresh token";

/// Tokens and profile produced by sign-in and sign-up.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// Long-lived token to be stored in the refresh cookie.
    pub refresh_token: String,
    /// Short-lived bearer token wrapping `refresh_token`.
    pub access_token: String,
    /// The signed-in user.
    pub user: UserProfile,
}

/// Result of minting a new access token from a refresh token.
#[derive(Debug, Clone)]
pub struct RefreshedSession {
    pub access_token: String,
    pub user: UserProfile,
}

/// Sign-up input.
#[derive(Debug, Clone)]
pub struct SignUp {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Manages the complete session lifecycle.
#[derive(Clone)]
pub struct SessionManager {
    /// Token encoder.
    jwt_encoder: Arc<JwtEncoder>,
    /// Token decoder.
    jwt_decoder: Arc<JwtDecoder>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
    /// Auth configuration.
    auth_config: AuthConfig,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("use_auth", &self.auth_config.use_auth)
            .field("refresh_cookie_name", &self.auth_config.refresh_cookie_name)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        user_repo: Arc<UserRepository>,
        password_hasher: Arc<PasswordHasher>,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            jwt_encoder,
            jwt_decoder,
            user_repo,
            password_hasher,
            auth_config,
        }
    }

    /// Whether bearer gating is enabled.
    pub fn use_auth(&self) -> bool {
        self.auth_config.use_auth
    }

    /// Name of the cookie holding the refresh token.
    pub fn refresh_cookie_name(&self) -> &str {
        &self.auth_config.refresh_cookie_name
    }

    /// Lifetime of the refresh token, and so of its cookie.
    pub fn refresh_ttl(&self) -> Duration {
        Duration::days(self.auth_config.refresh_ttl_days as i64)
    }

    /// Token decoder used by request gating.
    pub fn decoder(&self) -> &JwtDecoder {
        &self.jwt_decoder
    }

    /// Verifies credentials and issues a refresh/access token pair.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<IssuedSession, AppError> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            debug!(email = %email, "Sign-in for unknown email");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        let hasher = self.password_hasher.clone();
        let candidate = password.to_string();
        let stored = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || hasher.verify_password(&candidate, &stored))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))??;

        if !valid {
            warn!(user_id = %user.id, "Sign-in with wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let session = self.issue(&user)?;
        info!(user_id = %user.id, "Sign-in successful");
        Ok(session)
    }

    /// Registers a new user and signs them in.
    pub async fn sign_up(&self, input: SignUp) -> Result<IssuedSession, AppError> {
        if input.password.chars().count() < self.auth_config.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.auth_config.password_min_length
            )));
        }

        let hasher = self.password_hasher.clone();
        let password = input.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))??;

        let user = self
            .user_repo
            .create(CreateUser {
                email: input.email,
                first_name: input.first_name,
                last_name: input.last_name,
                password_hash,
            })
            .await?;

        let session = self.issue(&user)?;
        info!(user_id = %user.id, "Sign-up successful");
        Ok(session)
    }

    /// Mints a new access token from the refresh cookie value.
    pub async fn refresh(&self, refresh_token: Option<&str>) -> Result<RefreshedSession, AppError> {
        let refresh_token =
            refresh_token.ok_or_else(|| AppError::forbidden(INVALID_REFRESH_TOKEN))?;

        let user_id = self
            .jwt_decoder
            .verify_refresh_token(refresh_token)
            .ok_or_else(|| AppError::forbidden(INVALID_REFRESH_TOKEN))?;

        let user = self
            .find_user(user_id)
            .await?
            .ok_or_else(|| AppError::forbidden(INVALID_REFRESH_TOKEN))?;

        let access_token = self.jwt_encoder.issue_access_token(refresh_token)?;
        debug!(user_id = %user.id, "Access token refreshed");

        Ok(RefreshedSession {
            access_token,
            user: UserProfile::from(&user),
        })
    }

    /// Resolves the user behind an access token.
    pub async fn identify(&self, access_token: &str) -> Result<UserProfile, AppError> {
        let user_id = self
            .jwt_decoder
            .resolve_user_id(access_token)
            .ok_or_else(|| AppError::forbidden(UNAUTHORIZED_MESSAGE))?;

        self.find_user(user_id)
            .await?
            .map(UserProfile::from)
            .ok_or_else(|| AppError::forbidden(UNAUTHORIZED_MESSAGE))
    }

    async fn find_user(&self, user_id: UserId) -> Result<Option<User>, AppError> {
        self.user_repo.find_by_id(user_id).await
    }

    fn issue(&self, user: &User) -> Result<IssuedSession, AppError> {
        let refresh_token = self.jwt_encoder.issue_refresh_token(user.id)?;
        let access_token = self.jwt_encoder.issue_access_token(&refresh_token)?;

        Ok(IssuedSession {
            refresh_token,
            access_token,
            user: UserProfile::from(user),
        })
    }
}
