//! Listing repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use staybook_core::error::AppError;
use staybook_core::result::AppResult;
use staybook_core::traits::Repository;
use staybook_core::types::{ListingId, UserId, next_id};
use staybook_entity::listing::{CreateListing, Listing, ListingWithLocation};

use crate::store::DataStore;

/// Repository for listings and their joined locations.
#[derive(Debug, Clone)]
pub struct ListingRepository {
    store: Arc<DataStore>,
}

impl ListingRepository {
    /// Create a new listing repository.
    pub fn new(store: Arc<DataStore>) -> Self {
        Self { store }
    }

    /// Every listing joined with its location, in insertion order.
    /// Listings whose location is missing are skipped.
    pub async fn find_all_with_location(&self) -> AppResult<Vec<ListingWithLocation>> {
        Ok(self
            .store
            .read(|db| {
                db.listings
                    .iter()
                    .filter_map(|listing| {
                        db.locations
                            .iter()
                            .find(|l| l.id == listing.location_id)
                            .map(|location| ListingWithLocation {
                                listing: listing.clone(),
                                location: location.clone(),
                            })
                    })
                    .collect()
            })
            .await)
    }

    /// Insert a listing owned by `owner`. The referenced location must exist.
    pub async fn create(&self, owner: UserId, data: CreateListing) -> AppResult<Listing> {
        let listing = self
            .store
            .write(|db| {
                if !db.locations.iter().any(|l| l.id == data.location_id) {
                    return Err(AppError::not_found("Location not found"));
                }

                let now = Utc::now();
                let listing = Listing {
                    id: next_id(db.listings.iter().map(|l| l.id)),
                    name: data.name,
                    description: data.description,
                    location_id: data.location_id,
                    images: data.images,
                    availability: data.availability,
                    max_guests: data.max_guests,
                    price: data.price,
                    rating: data.rating,
                    guest_favorite: data.guest_favorite,
                    user_id: owner,
                    created_at: now,
                    modified_at: now,
                };
                db.listings.push(listing.clone());
                Ok(listing)
            })
            .await?;

        info!(listing_id = %listing.id, owner = %owner, "Listing created");
        Ok(listing)
    }
}

#[async_trait]
impl Repository<Listing, ListingId> for ListingRepository {
    async fn find_by_id(&self, id: ListingId) -> AppResult<Option<Listing>> {
        Ok(self
            .store
            .read(|db| db.listings.iter().find(|l| l.id == id).cloned())
            .await)
    }
}
