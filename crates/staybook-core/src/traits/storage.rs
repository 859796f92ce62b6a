//! Storage backend trait for the persisted key/value snapshot store.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for key/value storage backends.
///
/// Values are opaque strings (the database snapshot is stored as one JSON
/// document). Implementations exist for an in-process map and for a
/// directory of files; both live in `staybook-database`.
#[async_trait]
pub trait StorageBackend: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend type name (e.g., "memory", "file").
    fn name(&self) -> &'static str;

    /// Read the value stored under `key`. Returns `None` if absent.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;
}
