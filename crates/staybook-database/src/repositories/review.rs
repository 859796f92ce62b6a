//! Review repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use staybook_core::error::AppError;
use staybook_core::result::AppResult;
use staybook_core::traits::Repository;
use staybook_core::types::{ListingId, ReviewId, UserId, next_id};
use staybook_entity::review::{CreateReview, Review, UpdateReview};

use crate::store::DataStore;

/// Returned for a missing review and for a review written by someone else.
pub const REVIEW_NOT_FOUND_MESSAGE: &str = "Review not found or unauthorized";

/// Repository for listing reviews.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    store: Arc<DataStore>,
}

impl ReviewRepository {
    /// Create a new review repository.
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    /// Reviews for one listing, in insertion order.
    pub async fn find_by_listing(&self, listing_id: ListingId) -> AppResult<Vec<Review>> {
        Ok(self
            .store
            .read(|db| {
                db.reviews
                    .iter()
                    .filter(|r| r.listing_id == listing_id)
                    .cloned()
                    .collect()
            })
            .await)
    }

    /// Insert a review. A user may review each listing once.
    pub async fn create(&self, author: UserId, data: CreateReview) -> AppResult<Review> {
        let review = self
            .store
            .write(|db| {
                let already = db
                    .reviews
                    .iter()
                    .any(|r| r.user_id == author && r.listing_id == data.listing_id);
                if already {
                    return Err(AppError::validation("You have already reviewed this listing"));
                }

                let now = Utc::now();
                let review = Review {
                    id: next_id(db.reviews.iter().map(|r| r.id)),
                    user_id: author,
                    listing_id: data.listing_id,
                    rating: data.rating,
                    comment: data.comment,
                    created_at: now,
                    modified_at: now,
                };
                db.reviews.push(review.clone());
                Ok(review)
            })
            .await?;

        info!(review_id = %review.id, listing_id = %review.listing_id, "Review created");
        Ok(review)
    }

    /// Applies `update` to a review written by `author`.
    pub async fn update(
        &self,
        id: ReviewId,
        author: UserId,
        update: UpdateReview,
    ) -> AppResult<Review> {
        self.store
            .write(|db| {
                let review = db
                    .reviews
                    .iter_mut()
                    .find(|r| r.id == id && r.user_id == author)
                    .ok_or_else(|| AppError::not_found(REVIEW_NOT_FOUND_MESSAGE))?;
                review.apply(update, Utc::now());
                Ok(review.clone())
            })
            .await
    }

    /// Removes a review written by `author`.
    pub async fn delete(&self, id: ReviewId, author: UserId) -> AppResult<()> {
        self.store
            .write(|db| {
                let index = db
                    .reviews
                    .iter()
                    .position(|r| r.id == id && r.user_id == author)
                    .ok_or_else(|| AppError::not_found(REVIEW_NOT_FOUND_MESSAGE))?;
                db.reviews.remove(index);
                Ok(())
            })
            .await?;

        info!(review_id = %id, "Review deleted");
        Ok(())
    }
}

#[async_trait]
impl Repository<Review, ReviewId> for ReviewRepository {
    async fn find_by_id(&self, id: ReviewId) -> AppResult<Option<Review>> {
        Ok(self
            .store
            .read(|db| db.reviews.iter().find(|r| r.id == id).cloned())
            .await)
    }
}
