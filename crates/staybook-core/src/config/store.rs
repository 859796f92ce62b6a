//! Persisted snapshot store configuration.

use serde::{Deserialize, Serialize};

/// Which storage backend holds the database snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackendKind {
    /// Process-local map; contents are lost on exit.
    #[default]
    Memory,
    /// One JSON file per key under `StoreConfig::directory`.
    File,
}

/// Snapshot store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend selection.
    #[serde(default)]
    pub backend: StoreBackendKind,
    /// Directory used by the file backend.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Storage key under which the snapshot is persisted.
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackendKind::default(),
            directory: default_directory(),
            key: default_key(),
        }
    }
}

fn default_directory() -> String {
    "data/store".to_string()
}

fn default_key() -> String {
    "staybook-db".to_string()
}
