//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// When false, bearer gating is skipped and token-issuing endpoints
    /// answer with null tokens.
    #[serde(default = "default_true")]
    pub use_auth: bool,
    /// Secret key for token signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
    /// Clock skew tolerated when checking expiry, in seconds.
    #[serde(default)]
    pub leeway_seconds: u64,
    /// Name of the cookie carrying the refresh token.
    #[serde(default = "default_cookie_name")]
    pub refresh_cookie_name: String,
    /// Minimum password length accepted at sign-up.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_argon_memory")]
    pub argon2_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_argon_iterations")]
    pub argon2_iterations: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            use_auth: true,
            jwt_secret: default_jwt_secret(),
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_days: default_refresh_ttl(),
            leeway_seconds: 0,
            refresh_cookie_name: default_cookie_name(),
            password_min_length: default_password_min(),
            argon2_memory_kib: default_argon_memory(),
            argon2_iterations: default_argon_iterations(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    30
}

fn default_cookie_name() -> String {
    "refreshToken".to_string()
}

fn default_password_min() -> usize {
    8
}

fn default_argon_memory() -> u32 {
    19 * 1024
}

fn default_argon_iterations() -> u32 {
    2
}
