//! Booking operations for the signed-in user.

use std::sync::Arc;

use tracing::{info, warn};

use staybook_core::error::AppError;
use staybook_core::traits::Repository;
use staybook_core::types::BookingId;
use staybook_database::repositories::{BookingRepository, ListingRepository, NewBooking};
use staybook_entity::booking::{Booking, CreateBooking};
use staybook_entity::listing::DateRange;

use super::pricing::quote;
use crate::context::RequestContext;

/// Creates, lists and cancels bookings.
#[derive(Debug, Clone)]
pub struct BookingService {
    /// Booking repository.
    booking_repo: Arc<BookingRepository>,
    /// Listing repository.
    listing_repo: Arc<ListingRepository>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(booking_repo: Arc<BookingRepository>, listing_repo: Arc<ListingRepository>) -> Self {
        Self {
            booking_repo,
            listing_repo,
        }
    }

    /// The caller's bookings.
    pub async fn list_for_user(&self, ctx: &RequestContext) -> Result<Vec<Booking>, AppError> {
        self.booking_repo.find_by_user(ctx.user_id).await
    }

    /// Books a stay for the caller. The total price is computed here from
    /// the listing's nightly price.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateBooking,
    ) -> Result<Booking, AppError> {
        let listing = self
            .listing_repo
            .find_by_id(input.listing_id)
            .await?
            .ok_or_else(|| AppError::not_found("Listing not found"))?;

        let stay = DateRange::new(input.check_in, input.check_out);
        if !stay.is_valid() {
            return Err(AppError::validation("Check-out must be after check-in"));
        }

        if input.guests == 0 || input.guests > listing.max_guests {
            return Err(AppError::validation(format!(
                "Guests must be between 1 and {}",
                listing.max_guests
            )));
        }

        if !listing.is_available(&stay) {
            warn!(listing_id = %listing.id, "Stay outside listing availability");
            return Err(AppError::validation(
                "Listing is not available for the selected dates",
            ));
        }

        let price = quote(listing.price, &stay).inspect_err(|_| {
            warn!(
                listing_id = %listing.id,
                price = listing.price,
                nights = stay.nights(),
                "Stay total out of range"
            );
        })?;
        let booking = self
            .booking_repo
            .create(NewBooking {
                user_id: ctx.user_id,
                listing_id: listing.id,
                stay,
                guests: input.guests,
                total_price: price.total,
            })
            .await?;

        info!(
            booking_id = %booking.id,
            user_id = %ctx.user_id,
            nights = price.nights,
            total = price.total,
            "Stay booked"
        );
        Ok(booking)
    }

    /// Cancels one of the caller's bookings.
    pub async fn cancel(&self, ctx: &RequestContext, id: BookingId) -> Result<Booking, AppError> {
        self.booking_repo.cancel(id, ctx.user_id).await
    }
}
