//! Listing search parameters.

use serde::{Deserialize, Serialize};

use super::availability::DateRange;

/// Filters accepted by the listings search. Every filter is optional and
/// they combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingFilters {
    /// Only listings whose availability contains this range.
    pub dates: Option<DateRange>,
    /// Only listings hosting at least this many guests.
    pub guests: Option<u32>,
    /// Case-insensitive substring of the listing name.
    pub search: Option<String>,
}

/// Parameters of the public (anonymous) listing browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicListingParams {
    pub search: Option<String>,
    pub limit: usize,
}

impl Default for PublicListingParams {
    fn default() -> Self {
        Self {
            search: None,
            limit: 12,
        }
    }
}
