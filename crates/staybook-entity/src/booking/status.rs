//! Booking status enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Booked and upcoming.
    Confirmed,
    /// The stay has happened.
    Completed,
    /// Cancelled by the guest.
    Cancelled,
}

impl BookingStatus {
    /// Whether the booking still blocks the listing's calendar.
    pub fn holds_dates(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed => write!(f, "confirmed"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}
