//! Generic repository trait for entity access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic read repository trait.
///
/// Each entity has a strongly typed repository implementing this trait;
/// entity-specific queries and mutations are defined on the concrete
/// repository structs.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its identifier.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;
}
