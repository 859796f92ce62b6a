//! Listing queries and creation.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::info;

use staybook_core::error::AppError;
use staybook_core::traits::Repository;
use staybook_core::types::ListingId;
use staybook_database::repositories::{ListingRepository, LocationRepository};
use staybook_entity::listing::{
    CreateListing, Listing, ListingFilters, ListingWithLocation, PublicListingParams,
};

use crate::booking::MAX_NIGHTLY_PRICE;
use crate::context::RequestContext;

/// Number of listings returned by [`ListingService::featured`].
pub const FEATURED_LIMIT: usize = 6;

/// Read and create operations on listings.
#[derive(Debug, Clone)]
pub struct ListingService {
    /// Listing repository.
    listing_repo: Arc<ListingRepository>,
    /// Location repository.
    location_repo: Arc<LocationRepository>,
}

impl ListingService {
    /// Creates a new listing service.
    pub fn new(listing_repo: Arc<ListingRepository>, location_repo: Arc<LocationRepository>) -> Self {
        Self {
            listing_repo,
            location_repo,
        }
    }

    /// One listing with its location embedded.
    pub async fn get(&self, id: ListingId) -> Result<ListingWithLocation, AppError> {
        let listing = self
            .listing_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Listing not found"))?;

        let location = self
            .location_repo
            .find_by_id(listing.location_id)
            .await?
            .ok_or_else(|| AppError::not_found("Location not found"))?;

        Ok(ListingWithLocation { listing, location })
    }

    /// Listings matching every provided filter.
    ///
    /// A date range keeps listings whose availability contains it, a guest
    /// count keeps listings that fit that many guests, and a search term
    /// matches the name case-insensitively.
    pub async fn search(
        &self,
        filters: &ListingFilters,
    ) -> Result<Vec<ListingWithLocation>, AppError> {
        if let Some(dates) = &filters.dates {
            if !dates.is_valid() {
                return Err(AppError::validation("End date must be after start date"));
            }
        }

        let search = filters.search.as_deref().filter(|s| !s.is_empty());
        let listings = self.listing_repo.find_all_with_location().await?;

        Ok(listings
            .into_iter()
            .filter(|l| filters.dates.is_none_or(|d| l.listing.is_available(&d)))
            .filter(|l| filters.guests.is_none_or(|g| g <= l.listing.max_guests))
            .filter(|l| search.is_none_or(|s| l.listing.name_matches(s)))
            .collect())
    }

    /// The `limit` highest-rated listings. Ties keep insertion order.
    pub async fn featured(&self, limit: usize) -> Result<Vec<ListingWithLocation>, AppError> {
        let mut listings = self.listing_repo.find_all_with_location().await?;
        listings.sort_by(|a, b| {
            b.listing
                .rating
                .partial_cmp(&a.listing.rating)
                .unwrap_or(Ordering::Equal)
        });
        listings.truncate(limit);
        Ok(listings)
    }

    /// Listings for the public landing page: optional name search, capped
    /// at `params.limit`.
    pub async fn public(
        &self,
        params: &PublicListingParams,
    ) -> Result<Vec<ListingWithLocation>, AppError> {
        let search = params.search.as_deref().filter(|s| !s.is_empty());
        let listings = self.listing_repo.find_all_with_location().await?;

        Ok(listings
            .into_iter()
            .filter(|l| search.is_none_or(|s| l.listing.name_matches(s)))
            .take(params.limit)
            .collect())
    }

    /// Creates a listing owned by the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateListing,
    ) -> Result<Listing, AppError> {
        if input.name.trim().is_empty() {
            return Err(AppError::validation("Listing name cannot be empty"));
        }
        if !input.availability.is_valid() {
            return Err(AppError::validation(
                "Availability must end after it starts",
            ));
        }
        if input.max_guests == 0 {
            return Err(AppError::validation("A listing must host at least one guest"));
        }
        if input.price > MAX_NIGHTLY_PRICE {
            return Err(AppError::validation(format!(
                "Price must not exceed {MAX_NIGHTLY_PRICE} per night"
            )));
        }

        let listing = self.listing_repo.create(ctx.user_id, input).await?;
        info!(listing_id = %listing.id, user_id = %ctx.user_id, "Listing published");
        Ok(listing)
    }
}
