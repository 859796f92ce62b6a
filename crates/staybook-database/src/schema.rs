//! The persisted database snapshot.

use serde::{Deserialize, Serialize};

use staybook_entity::booking::Booking;
use staybook_entity::listing::Listing;
use staybook_entity::location::Location;
use staybook_entity::review::Review;
use staybook_entity::user::User;

/// Version of the snapshot layout. Bumping it makes every existing
/// snapshot stale, which triggers a reseed on the next open.
pub const SCHEMA_VERSION: u32 = 1;

/// All tables, stored together as one JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    /// Layout version the snapshot was written with.
    pub schema_version: u32,
    pub users: Vec<User>,
    pub locations: Vec<Location>,
    pub listings: Vec<Listing>,
    pub bookings: Vec<Booking>,
    pub reviews: Vec<Review>,
}

impl Database {
    /// An empty database stamped with the current schema version.
    pub fn empty() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ..Self::default()
        }
    }

    /// Whether the snapshot was written with the current layout.
    pub fn is_current(&self) -> bool {
        self.schema_version == SCHEMA_VERSION
    }
}
