//! Cached, cancellable GET requests.
//!
//! Results are cached per path and params for `client.stale_time_seconds`.
//! A fetch races its [`CancellationToken`]; a cancelled fetch yields
//! [`ClientError::Aborted`] and never touches the cache or a [`FetchState`].

use std::time::Duration;

use moka::future::Cache;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use staybook_core::config::ClientConfig;

use crate::client::{ApiClient, query_pairs};
use crate::error::ClientError;

/// GET helper with a time-to-live response cache.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: ApiClient,
    cache: Cache<String, serde_json::Value>,
}

impl Fetcher {
    pub fn new(client: ApiClient, config: &ClientConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(Duration::from_secs(config.stale_time_seconds))
            .build();

        Self { client, cache }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Cache key: the path, `?`, then the params as JSON.
    pub fn cache_key<P: Serialize>(path: &str, params: &P) -> Result<String, ClientError> {
        Ok(format!("{path}?{}", serde_json::to_string(params)?))
    }

    /// Fetches `path` with `params`, serving a fresh cached result when
    /// there is one.
    pub async fn fetch<P, R>(
        &self,
        path: &str,
        params: &P,
        cancel: &CancellationToken,
    ) -> Result<R, ClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let key = Self::cache_key(path, params)?;
        if let Some(cached) = self.cache.get(&key).await {
            debug!(key = %key, "Fetch cache hit");
            return Ok(serde_json::from_value(cached)?);
        }

        let query = query_pairs(params)?;
        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(key = %key, "Fetch aborted");
                return Err(ClientError::Aborted);
            }
            result = self.client.get::<serde_json::Value>(path, query) => result?,
        };

        self.cache.insert(key, body.clone()).await;
        Ok(serde_json::from_value(body)?)
    }

    /// Drops every cached result.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

/// What a component renders from: data, error and loading flag.
#[derive(Debug, Clone)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub error: Option<ClientError>,
    pub is_loading: bool,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: false,
        }
    }
}

impl<T> FetchState<T> {
    pub fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Records a fetch outcome. Aborted outcomes are ignored; returns
    /// whether the state changed.
    pub fn apply(&mut self, outcome: Result<T, ClientError>) -> bool {
        match outcome {
            Err(ClientError::Aborted) => return false,
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
        self.is_loading = false;
        true
    }
}

/// Owns the cancellation token of one component's in-flight fetch.
///
/// Starting a new fetch cancels the previous one; dropping the slot
/// cancels whatever is still running.
#[derive(Debug, Default)]
pub struct FetchSlot {
    current: Option<CancellationToken>,
}

impl FetchSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the in-flight fetch, if any, and hands out a token for the next.
    pub fn start(&mut self) -> CancellationToken {
        self.cancel();
        let token = CancellationToken::new();
        self.current = Some(token.clone());
        token
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }
}

impl Drop for FetchSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
