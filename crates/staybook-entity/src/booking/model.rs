//! Booking entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use staybook_core::types::{BookingId, ListingId, UserId};

use super::status::BookingStatus;
use crate::listing::DateRange;

/// A guest's reservation of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique booking identifier.
    pub id: BookingId,
    /// The guest.
    pub user_id: UserId,
    /// The reserved listing.
    pub listing_id: ListingId,
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
    /// Number of guests.
    pub guests: u32,
    /// Total charged, fees included.
    pub total_price: u64,
    /// Current status.
    pub status: BookingStatus,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was last modified.
    pub modified_at: DateTime<Utc>,
}

impl Booking {
    /// The stay as a date range.
    pub fn stay(&self) -> DateRange {
        DateRange::new(self.check_in, self.check_out)
    }
}

/// Guest-supplied booking data. The price is computed by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub listing_id: ListingId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}
