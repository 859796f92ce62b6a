//! Review operations.

use std::sync::Arc;

use tracing::info;

use staybook_core::error::AppError;
use staybook_core::traits::Repository;
use staybook_core::types::{ListingId, ReviewId};
use staybook_database::repositories::{ListingRepository, ReviewRepository};
use staybook_entity::review::{
    CreateReview, MAX_RATING, MIN_RATING, Review, UpdateReview, is_valid_rating,
};

use crate::context::RequestContext;

/// Lists, writes, edits and removes reviews.
#[derive(Debug, Clone)]
pub struct ReviewService {
    /// Review repository.
    review_repo: Arc<ReviewRepository>,
    /// Listing repository.
    listing_repo: Arc<ListingRepository>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(review_repo: Arc<ReviewRepository>, listing_repo: Arc<ListingRepository>) -> Self {
        Self {
            review_repo,
            listing_repo,
        }
    }

    /// Reviews for one listing.
    pub async fn list_for_listing(&self, listing_id: ListingId) -> Result<Vec<Review>, AppError> {
        self.review_repo.find_by_listing(listing_id).await
    }

    /// Writes a review as the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateReview,
    ) -> Result<Review, AppError> {
        check_rating(input.rating)?;

        if self.listing_repo.find_by_id(input.listing_id).await?.is_none() {
            return Err(AppError::not_found("Listing not found"));
        }

        self.review_repo.create(ctx.user_id, input).await
    }

    /// Edits one of the caller's reviews.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: ReviewId,
        update: UpdateReview,
    ) -> Result<Review, AppError> {
        if let Some(rating) = update.rating {
            check_rating(rating)?;
        }

        let review = self.review_repo.update(id, ctx.user_id, update).await?;
        info!(review_id = %id, user_id = %ctx.user_id, "Review updated");
        Ok(review)
    }

    /// Removes one of the caller's reviews.
    pub async fn delete(&self, ctx: &RequestContext, id: ReviewId) -> Result<(), AppError> {
        self.review_repo.delete(id, ctx.user_id).await
    }
}

fn check_rating(rating: u8) -> Result<(), AppError> {
    if is_valid_rating(rating) {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}"
        )))
    }
}
