//! Location repository implementation.

use std::sync::Arc;

use async_trait::async_trait;

use staybook_core::result::AppResult;
use staybook_core::traits::Repository;
use staybook_core::types::LocationId;
use staybook_entity::location::Location;

use crate::store::DataStore;

/// Read-only access to locations.
#[derive(Debug, Clone)]
pub struct LocationRepository {
    store: Arc<DataStore>,
}

impl LocationRepository {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Repository<Location, LocationId> for LocationRepository {
    async fn find_by_id(&self, id: LocationId) -> AppResult<Option<Location>> {
        Ok(self
            .store
            .read(|db| db.locations.iter().find(|l| l.id == id).cloned())
            .await)
    }
}
