//! Storage backend implementations and selection from configuration.

pub mod file;
pub mod memory;

use std::sync::Arc;

use tracing::info;

use staybook_core::config::{StoreBackendKind, StoreConfig};
use staybook_core::result::AppResult;
use staybook_core::traits::StorageBackend;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Creates the backend selected by `config.backend`.
pub async fn open_backend(config: &StoreConfig) -> AppResult<Arc<dyn StorageBackend>> {
    let backend: Arc<dyn StorageBackend> = match config.backend {
        StoreBackendKind::Memory => Arc::new(MemoryBackend::new()),
        StoreBackendKind::File => Arc::new(FileBackend::open(&config.directory).await?),
    };

    info!(backend = backend.name(), key = %config.key, "Storage backend ready");
    Ok(backend)
}
