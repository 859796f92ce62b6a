//! Versioned snapshot store with serialized writers.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use staybook_core::result::AppResult;
use staybook_core::traits::StorageBackend;

use crate::schema::Database;

/// Why an existing snapshot was discarded in favour of the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A current snapshot was loaded as-is.
    Loaded,
    /// No snapshot existed.
    SeededEmpty,
    /// The snapshot had another schema version.
    SeededStale,
    /// The snapshot could not be parsed.
    SeededCorrupt,
}

/// Holds the database snapshot in memory and persists it through a
/// [`StorageBackend`] after every write.
///
/// Writers hold the write lock across mutate-and-persist, so concurrent
/// read-modify-write sequences cannot interleave.
#[derive(Debug)]
pub struct DataStore {
    backend: Arc<dyn StorageBackend>,
    key: String,
    state: RwLock<Database>,
    outcome: OpenOutcome,
}

impl DataStore {
    /// Loads the snapshot stored under `key`, reseeding with `seed` when it
    /// is absent, unreadable, or was written with another schema version.
    pub async fn open<F>(
        backend: Arc<dyn StorageBackend>,
        key: impl Into<String>,
        seed: F,
    ) -> AppResult<Self>
    where
        F: FnOnce() -> AppResult<Database>,
    {
        let key = key.into();
        let raw = backend.get(&key).await?;

        let (database, outcome) = match raw.map(|raw| serde_json::from_str::<Database>(&raw)) {
            Some(Ok(db)) if db.is_current() => (db, OpenOutcome::Loaded),
            Some(Ok(db)) => {
                info!(
                    found = db.schema_version,
                    expected = crate::schema::SCHEMA_VERSION,
                    "Snapshot schema changed, reseeding"
                );
                (seed()?, OpenOutcome::SeededStale)
            }
            Some(Err(e)) => {
                warn!(error = %e, "Snapshot unreadable, reseeding");
                (seed()?, OpenOutcome::SeededCorrupt)
            }
            None => {
                info!(key = %key, "No snapshot found, seeding");
                (seed()?, OpenOutcome::SeededEmpty)
            }
        };

        if outcome != OpenOutcome::Loaded {
            persist(backend.as_ref(), &key, &database).await?;
        }

        Ok(Self {
            backend,
            key,
            state: RwLock::new(database),
            outcome,
        })
    }

    /// How the snapshot was obtained at open time.
    pub fn outcome(&self) -> OpenOutcome {
        self.outcome
    }

    /// Runs `f` against the current snapshot.
    pub async fn read<R>(&self, f: impl FnOnce(&Database) -> R) -> R {
        let guard = self.state.read().await;
        f(&guard)
    }

    /// Applies `f` to a copy of the snapshot, persists the copy, and only
    /// then publishes it. If `f` or persisting fails nothing changes.
    pub async fn write<R>(&self, f: impl FnOnce(&mut Database) -> AppResult<R>) -> AppResult<R> {
        let mut guard = self.state.write().await;
        let mut next = guard.clone();
        let result = f(&mut next)?;
        persist(self.backend.as_ref(), &self.key, &next).await?;
        *guard = next;
        Ok(result)
    }

    /// Replaces the whole snapshot.
    pub async fn replace(&self, database: Database) -> AppResult<()> {
        let mut guard = self.state.write().await;
        persist(self.backend.as_ref(), &self.key, &database).await?;
        *guard = database;
        info!(key = %self.key, "Snapshot replaced");
        Ok(())
    }
}

async fn persist(backend: &dyn StorageBackend, key: &str, database: &Database) -> AppResult<()> {
    let json = serde_json::to_string(database)?;
    backend.set(key, &json).await?;
    debug!(key, bytes = json.len(), backend = backend.name(), "Snapshot persisted");
    Ok(())
}
