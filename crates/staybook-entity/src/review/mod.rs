//! Review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use staybook_core::types::{ListingId, ReviewId, UserId};

/// Lowest accepted star rating.
pub const MIN_RATING: u8 = 1;
/// Highest accepted star rating.
pub const MAX_RATING: u8 = 5;

/// A guest's rating and comment on a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// The author.
    pub user_id: UserId,
    /// The reviewed listing.
    pub listing_id: ListingId,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Free-form comment.
    pub comment: String,
    /// When the review was created.
    pub created_at: DateTime<Utc>,
    /// When the review was last modified.
    pub modified_at: DateTime<Utc>,
}

/// Data required to create a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReview {
    pub listing_id: ListingId,
    pub rating: u8,
    pub comment: String,
}

/// Partial review update; absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReview {
    pub rating: Option<u8>,
    pub comment: Option<String>,
}

impl Review {
    /// Applies a partial update and bumps the modification time.
    pub fn apply(&mut self, update: UpdateReview, now: DateTime<Utc>) {
        if let Some(rating) = update.rating {
            self.rating = rating;
        }
        if let Some(comment) = update.comment {
            self.comment = comment;
        }
        self.modified_at = now;
    }
}

/// Whether `rating` is within the accepted star range.
pub fn is_valid_rating(rating: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}
