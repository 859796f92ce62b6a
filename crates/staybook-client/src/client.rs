//! API client with the single-retry refresh interceptor.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use staybook_core::types::ListingId;
use staybook_entity::listing::ListingWithLocation;
use staybook_entity::user::UserProfile;

use crate::error::ClientError;
use crate::favorites::Favorites;
use crate::session::{SessionEvent, SessionPhase, SessionState};
use crate::transport::{ApiRequest, ApiResponse, Transport};

const REFRESH_PATH: &str = "/api/refreshToken";

/// Body returned by the token-issuing endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub access_token: Option<String>,
    pub user: Option<UserProfile>,
}

/// Sign-up form fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Shared API client. Clones share the transport, the session and the
/// favorites.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: Arc<RwLock<SessionState>>,
    favorites: Arc<RwLock<Favorites>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            session: Arc::new(RwLock::new(SessionState::new())),
            favorites: Arc::new(RwLock::new(Favorites::new())),
        }
    }

    pub async fn phase(&self) -> SessionPhase {
        self.session.read().await.phase()
    }

    pub async fn access_token(&self) -> Option<String> {
        self.session.read().await.access_token().map(str::to_string)
    }

    pub async fn user(&self) -> Option<UserProfile> {
        self.session.read().await.user().cloned()
    }

    /// Sends `request` through the interceptor.
    ///
    /// The current access token is attached unless the request is already a
    /// retry. An "Unauthorized" response triggers one refresh; on success the
    /// request is resent once with the new token, on failure the session is
    /// signed out and the original response is returned.
    pub async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ClientError> {
        if !request.is_retry {
            request.bearer = self.access_token().await;
        }

        let response = self.transport.send(request.clone()).await?;
        if request.is_retry || !response.is_unauthorized() {
            return Ok(response);
        }

        debug!(path = %request.path, "Access token rejected, refreshing");
        match self.refresh().await {
            Some(token) => self.transport.send(request.into_retry(token)).await,
            None => {
                self.session.write().await.apply(SessionEvent::RefreshFailed);
                Ok(response)
            }
        }
    }

    /// Mints a new access token from the refresh cookie and stores it.
    async fn refresh(&self) -> Option<String> {
        let mut request = ApiRequest::get(REFRESH_PATH);
        request.is_retry = true;

        let payload = match self.transport.send(request).await {
            Ok(response) if response.is_success() => {
                serde_json::from_value::<AuthPayload>(response.body).ok()?
            }
            Ok(response) => {
                debug!(status = response.status.as_u16(), "Token refresh rejected");
                return None;
            }
            Err(e) => {
                debug!(error = %e, "Token refresh failed");
                return None;
            }
        };

        let token = payload.access_token?;
        self.session
            .write()
            .await
            .replace_access_token(token.clone());
        Some(token)
    }

    /// Sends `request` and decodes a success body into `R`.
    pub async fn execute<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ClientError> {
        let body = self.send(request).await?.into_result()?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<R, ClientError> {
        self.execute(ApiRequest::get(path).with_query(query)).await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ClientError> {
        self.execute(ApiRequest::post(path).with_body(serde_json::to_value(body)?))
            .await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ClientError> {
        self.execute(ApiRequest::put(path).with_body(serde_json::to_value(body)?))
            .await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        self.execute(ApiRequest::delete(path)).await
    }

    /// Resolves the session on load via `GET /api/me`.
    pub async fn identity_check(&self) -> SessionPhase {
        let event = match self.execute::<AuthPayload>(ApiRequest::get("/api/me")).await {
            Ok(payload) => {
                // The interceptor may have stored a renewed token meanwhile.
                let access_token = match payload.access_token {
                    Some(token) => Some(token),
                    None => self.access_token().await,
                };
                SessionEvent::IdentityConfirmed {
                    access_token,
                    user: payload.user,
                }
            }
            Err(e) => {
                debug!(error = %e, "Identity check failed");
                SessionEvent::IdentityRejected
            }
        };

        let mut session = self.session.write().await;
        session.apply(event);
        session.phase()
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthPayload, ClientError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let payload: AuthPayload = self.post("/api/signin", &body).await?;
        self.signed_in(&payload).await;
        Ok(payload)
    }

    pub async fn sign_up(&self, form: &SignUpForm) -> Result<AuthPayload, ClientError> {
        let payload: AuthPayload = self.post("/api/signup", form).await?;
        self.signed_in(&payload).await;
        Ok(payload)
    }

    pub async fn sign_out(&self) -> Result<(), ClientError> {
        self.send(ApiRequest::post("/api/signout"))
            .await?
            .into_result()?;

        self.session.write().await.apply(SessionEvent::SignedOut);
        info!("Signed out");
        Ok(())
    }

    /// Flips `id` in the favorites and returns whether it is now one.
    /// Only signed-in users may change favorites.
    pub async fn toggle_favorite(&self, id: ListingId) -> Result<bool, ClientError> {
        if self.phase().await != SessionPhase::Authenticated {
            return Err(ClientError::Unauthorized("Unauthorized".into()));
        }
        let now_favorite = self.favorites.write().await.toggle(id);
        debug!(listing_id = %id, now_favorite, "Favorite toggled");
        Ok(now_favorite)
    }

    pub async fn is_favorite(&self, id: ListingId) -> bool {
        self.favorites.read().await.contains(id)
    }

    /// The favorite entries of `listings`.
    pub async fn favorite_listings(
        &self,
        listings: &[ListingWithLocation],
    ) -> Vec<ListingWithLocation> {
        self.favorites.read().await.select(listings)
    }

    async fn signed_in(&self, payload: &AuthPayload) {
        self.session.write().await.apply(SessionEvent::SignedIn {
            access_token: payload.access_token.clone(),
            user: payload.user.clone(),
        });
    }
}

/// Flattens a serializable params struct into query pairs, skipping nulls.
pub fn query_pairs<P: Serialize>(params: &P) -> Result<Vec<(String, String)>, ClientError> {
    let value = serde_json::to_value(params)?;
    let Some(map) = value.as_object() else {
        return Ok(Vec::new());
    };

    Ok(map
        .iter()
        .filter_map(|(k, v)| match v {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some((k.clone(), s.clone())),
            other => Some((k.clone(), other.to_string())),
        })
        .collect())
}
