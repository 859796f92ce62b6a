//! Listing entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use staybook_core::types::{ListingId, LocationId, UserId};

use super::availability::DateRange;
use crate::location::Location;

/// A bookable property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique listing identifier.
    pub id: ListingId,
    /// Title shown in search results.
    pub name: String,
    /// Long description.
    pub description: String,
    /// Where the property is.
    pub location_id: LocationId,
    /// Image URLs.
    pub images: Vec<String>,
    /// Dates the host accepts bookings for.
    pub availability: DateRange,
    /// Maximum number of guests per booking.
    pub max_guests: u32,
    /// Price per night in whole currency units.
    pub price: u64,
    /// Average rating (0-5).
    pub rating: f32,
    /// Whether the listing carries the guest-favorite badge.
    #[serde(default)]
    pub guest_favorite: bool,
    /// The host.
    pub user_id: UserId,
    /// When the listing was created.
    pub created_at: DateTime<Utc>,
    /// When the listing was last modified.
    pub modified_at: DateTime<Utc>,
}

impl Listing {
    /// Case-insensitive substring match on the listing name.
    pub fn name_matches(&self, search: &str) -> bool {
        self.name.to_lowercase().contains(&search.to_lowercase())
    }

    /// Whether the whole `range` falls within the listing's availability.
    pub fn is_available(&self, range: &DateRange) -> bool {
        self.availability.contains_range(range)
    }
}

/// A listing with its location embedded, as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingWithLocation {
    #[serde(flatten)]
    pub listing: Listing,
    pub location: Location,
}

/// Data required to create a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListing {
    pub name: String,
    pub description: String,
    pub location_id: LocationId,
    #[serde(default)]
    pub images: Vec<String>,
    pub availability: DateRange,
    pub max_guests: u32,
    pub price: u64,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub guest_favorite: bool,
}
