//! Newtype wrappers around `u64` for all domain entity identifiers.
//!
//! Using distinct types prevents accidentally passing a `UserId` where a
//! `ListingId` is expected. Identifiers are allocated sequentially by the
//! repositories (`max + 1`) and serialize as plain JSON numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `u64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Create an identifier from a raw value.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Return the raw value.
            pub const fn get(self) -> u64 {
                self.0
            }

            /// The identifier following this one.
            pub const fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>().map(Self)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user.
    UserId
);

define_id!(
    /// Unique identifier for a listing.
    ListingId
);

define_id!(
    /// Unique identifier for a location.
    LocationId
);

define_id!(
    /// Unique identifier for a booking.
    BookingId
);

define_id!(
    /// Unique identifier for a review.
    ReviewId
);

/// Returns the id following the largest one produced by `ids`, starting at 1.
pub fn next_id<I, T>(ids: I) -> T
where
    I: IntoIterator<Item = T>,
    T: Into<u64> + From<u64>,
{
    let max = ids.into_iter().map(Into::into).max().unwrap_or(0);
    T::from(max + 1)
}
