//! Request context carrying the authenticated caller.

use serde::{Deserialize, Serialize};

use staybook_core::types::UserId;

/// Context for the current authenticated request.
///
/// Built by the API layer once the bearer has been resolved and passed
/// into service methods so that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
