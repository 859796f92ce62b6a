//! Location entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use staybook_core::types::LocationId;

/// A city or region listings are attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Unique location identifier.
    pub id: LocationId,
    /// Display name (e.g. "Lisbon").
    pub name: String,
    /// Country name.
    pub country: String,
    /// When the location was created.
    pub created_at: DateTime<Utc>,
    /// When the location was last modified.
    pub modified_at: DateTime<Utc>,
}
