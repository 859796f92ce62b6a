//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use staybook_core::error::AppError;
use staybook_core::types::{ListingId, LocationId};
use staybook_entity::booking::CreateBooking;
use staybook_entity::listing::{CreateListing, DateRange, ListingFilters, PublicListingParams};
use staybook_entity::review::{CreateReview, UpdateReview};
use staybook_service::booking::MAX_NIGHTLY_PRICE;

/// Sign-in request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Minimum length is enforced by the session manager from configuration.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create listing request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    #[validate(length(min = 1, max = 200, message = "Listing name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub location_id: LocationId,
    #[serde(default)]
    pub images: Vec<String>,
    pub availability: DateRange,
    #[validate(range(min = 1, message = "A listing must host at least one guest"))]
    pub max_guests: u32,
    #[validate(range(max = MAX_NIGHTLY_PRICE, message = "Price must not exceed 1000000 per night"))]
    pub price: u64,
    #[validate(range(min = 0.0, max = 5.0))]
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub guest_favorite: bool,
}

impl From<CreateListingRequest> for CreateListing {
    fn from(req: CreateListingRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            location_id: req.location_id,
            images: req.images,
            availability: req.availability,
            max_guests: req.max_guests,
            price: req.price,
            rating: req.rating,
            guest_favorite: req.guest_favorite,
        }
    }
}

/// Create review request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub listing_id: ListingId,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub comment: String,
}

impl From<CreateReviewRequest> for CreateReview {
    fn from(req: CreateReviewRequest) -> Self {
        Self {
            listing_id: req.listing_id,
            rating: req.rating,
            comment: req.comment,
        }
    }
}

/// Update review request. Absent fields keep their value.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<u8>,
    #[validate(length(max = 2000))]
    pub comment: Option<String>,
}

impl From<UpdateReviewRequest> for UpdateReview {
    fn from(req: UpdateReviewRequest) -> Self {
        Self {
            rating: req.rating,
            comment: req.comment,
        }
    }
}

/// Create booking request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub listing_id: ListingId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[validate(range(min = 1, message = "At least one guest is required"))]
    pub guests: u32,
    /// Client-side estimate. The stored total is always recomputed.
    #[serde(default)]
    pub total_price: Option<u64>,
}

impl From<CreateBookingRequest> for CreateBooking {
    fn from(req: CreateBookingRequest) -> Self {
        Self {
            listing_id: req.listing_id,
            check_in: req.check_in,
            check_out: req.check_out,
            guests: req.guests,
        }
    }
}

/// Query parameters of `GET /api/listings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub guests: Option<u32>,
    pub search: Option<String>,
}

impl TryFrom<ListingQuery> for ListingFilters {
    type Error = AppError;

    fn try_from(query: ListingQuery) -> Result<Self, Self::Error> {
        let dates = match (query.from, query.to) {
            (Some(from), Some(to)) => Some(DateRange::new(from, to)),
            (None, None) => None,
            _ => {
                return Err(AppError::validation(
                    "Both from and to are required to filter by dates",
                ));
            }
        };

        Ok(Self {
            dates,
            guests: query.guests.filter(|g| *g > 0),
            search: query.search,
        })
    }
}

/// Query parameters of `GET /api/listings/public`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicQuery {
    pub search: Option<String>,
    pub limit: Option<usize>,
}

impl From<PublicQuery> for PublicListingParams {
    fn from(query: PublicQuery) -> Self {
        let defaults = PublicListingParams::default();
        Self {
            search: query.search,
            limit: query.limit.unwrap_or(defaults.limit),
        }
    }
}

/// Query parameters of `GET /api/reviews`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewQuery {
    pub listing_id: Option<ListingId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_query_needs_both_dates() {
        let query = ListingQuery {
            from: NaiveDate::from_ymd_opt(2026, 1, 1),
            ..Default::default()
        };
        assert!(ListingFilters::try_from(query).is_err());

        let filters = ListingFilters::try_from(ListingQuery {
            guests: Some(0),
            search: Some("loft".into()),
            ..Default::default()
        })
        .unwrap();
        assert!(filters.dates.is_none());
        assert!(filters.guests.is_none());
        assert_eq!(filters.search.as_deref(), Some("loft"));
    }

    #[test]
    fn test_review_rating_rules() {
        let req = CreateReviewRequest {
            listing_id: ListingId(1),
            rating: 6,
            comment: String::new(),
        };
        assert!(req.validate().is_err());

        let update = UpdateReviewRequest {
            rating: None,
            comment: Some("ok".into()),
        };
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_sign_up_deserializes_camel_case() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"firstName":"A","lastName":"B","email":"a@x.com","password":"secret123"}"#,
        )
        .unwrap();
        assert_eq!(req.first_name, "A");
        assert!(req.validate().is_ok());
    }
}
