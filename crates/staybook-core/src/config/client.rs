//! Client-side fetch configuration.

use serde::{Deserialize, Serialize};

/// Settings for the in-process client: fetch cache staleness and the
/// artificial latency of the simulated transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Cached fetch results younger than this are served without a request.
    #[serde(default = "default_stale_time")]
    pub stale_time_seconds: u64,
    /// Maximum number of cached fetch results.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// Delay applied before every simulated request, in milliseconds.
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            stale_time_seconds: default_stale_time(),
            cache_capacity: default_cache_capacity(),
            simulated_latency_ms: 0,
        }
    }
}

fn default_stale_time() -> u64 {
    5 * 60
}

fn default_cache_capacity() -> u64 {
    1_000
}
