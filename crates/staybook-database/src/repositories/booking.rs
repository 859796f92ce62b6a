//! Booking repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use staybook_core::error::AppError;
use staybook_core::result::AppResult;
use staybook_core::traits::Repository;
use staybook_core::types::{BookingId, ListingId, UserId, next_id};
use staybook_entity::booking::{Booking, BookingStatus};
use staybook_entity::listing::DateRange;

use crate::store::DataStore;

/// Returned for a missing booking and for a booking owned by someone else.
pub const BOOKING_NOT_FOUND_MESSAGE: &str = "Booking not found or unauthorized";

/// A validated, priced booking ready to be stored.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: UserId,
    pub listing_id: ListingId,
    pub stay: DateRange,
    pub guests: u32,
    pub total_price: u64,
}

/// Repository for bookings.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    store: Arc<DataStore>,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    /// Bookings made by `user_id`, in insertion order.
    pub async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        Ok(self
            .store
            .read(|db| {
                db.bookings
                    .iter()
                    .filter(|b| b.user_id == user_id)
                    .cloned()
                    .collect()
            })
            .await)
    }

    /// Bookings on `listing_id` that still hold their dates.
    pub async fn find_active_by_listing(&self, listing_id: ListingId) -> AppResult<Vec<Booking>> {
        Ok(self
            .store
            .read(|db| {
                db.bookings
                    .iter()
                    .filter(|b| b.listing_id == listing_id && b.status.holds_dates())
                    .cloned()
                    .collect()
            })
            .await)
    }

    /// Stores a confirmed booking unless its stay overlaps an active booking
    /// on the same listing. The overlap check and the insert happen under
    /// one write lock.
    pub async fn create(&self, data: NewBooking) -> AppResult<Booking> {
        let booking = self
            .store
            .write(|db| {
                let clash = db.bookings.iter().any(|b| {
                    b.listing_id == data.listing_id
                        && b.status.holds_dates()
                        && b.stay().overlaps(&data.stay)
                });
                if clash {
                    return Err(AppError::conflict(
                        "Listing is not available for the selected dates",
                    ));
                }

                let now = Utc::now();
                let booking = Booking {
                    id: next_id(db.bookings.iter().map(|b| b.id)),
                    user_id: data.user_id,
                    listing_id: data.listing_id,
                    check_in: data.stay.from,
                    check_out: data.stay.to,
                    guests: data.guests,
                    total_price: data.total_price,
                    status: BookingStatus::Confirmed,
                    created_at: now,
                    modified_at: now,
                };
                db.bookings.push(booking.clone());
                Ok(booking)
            })
            .await?;

        info!(booking_id = %booking.id, listing_id = %booking.listing_id, "Booking created");
        Ok(booking)
    }

    /// Marks the booking cancelled if `user_id` owns it.
    pub async fn cancel(&self, id: BookingId, user_id: UserId) -> AppResult<Booking> {
        let booking = self
            .store
            .write(|db| {
                let booking = db
                    .bookings
                    .iter_mut()
                    .find(|b| b.id == id && b.user_id == user_id)
                    .ok_or_else(|| AppError::not_found(BOOKING_NOT_FOUND_MESSAGE))?;

                if booking.status == BookingStatus::Cancelled {
                    return Err(AppError::validation("Booking is already cancelled"));
                }

                booking.status = BookingStatus::Cancelled;
                booking.modified_at = Utc::now();
                Ok(booking.clone())
            })
            .await?;

        info!(booking_id = %id, "Booking cancelled");
        Ok(booking)
    }
}

#[async_trait]
impl Repository<Booking, BookingId> for BookingRepository {
    async fn find_by_id(&self, id: BookingId) -> AppResult<Option<Booking>> {
        Ok(self
            .store
            .read(|db| db.bookings.iter().find(|b| b.id == id).cloned())
            .await)
    }
}
