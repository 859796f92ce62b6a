//! Listing handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use staybook_core::error::AppError;
use staybook_core::types::ListingId;
use staybook_entity::listing::{
    Listing, ListingFilters, ListingWithLocation, PublicListingParams,
};
use staybook_service::listing::service::FEATURED_LIMIT;

use crate::dto::request::{CreateListingRequest, ListingQuery, PublicQuery};
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/listings/{id}
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListingWithLocation>, AppError> {
    let id: ListingId = parse_id(&id)?;
    let listing = state.listing_service.get(id).await?;
    Ok(Json(listing))
}

/// GET /api/listings
pub async fn list_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Vec<ListingWithLocation>>, AppError> {
    let filters = ListingFilters::try_from(query)?;
    let listings = state.listing_service.search(&filters).await?;
    Ok(Json(listings))
}

/// POST /api/listings
pub async fn create_listing(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateListingRequest>,
) -> Result<Json<Listing>, AppError> {
    let listing = state.listing_service.create(&auth, req.into()).await?;
    Ok(Json(listing))
}

/// GET /api/listings/featured
pub async fn featured_listings(
    State(state): State<AppState>,
) -> Result<Json<Vec<ListingWithLocation>>, AppError> {
    let listings = state.listing_service.featured(FEATURED_LIMIT).await?;
    Ok(Json(listings))
}

/// GET /api/listings/public
pub async fn public_listings(
    State(state): State<AppState>,
    Query(query): Query<PublicQuery>,
) -> Result<Json<Vec<ListingWithLocation>>, AppError> {
    let listings = state
        .listing_service
        .public(&PublicListingParams::from(query))
        .await?;
    Ok(Json(listings))
}
