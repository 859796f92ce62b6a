//! Review handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use staybook_core::error::AppError;
use staybook_core::types::ReviewId;
use staybook_entity::review::Review;

use crate::dto::request::{CreateReviewRequest, ReviewQuery, UpdateReviewRequest};
use crate::dto::response::MessageResponse;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/reviews?listingId=
pub async fn list_reviews(
    State(state): State<AppState>,
    Query(query): Query<ReviewQuery>,
) -> Result<Json<Vec<Review>>, AppError> {
    let listing_id = query
        .listing_id
        .ok_or_else(|| AppError::validation("listingId is required"))?;
    let reviews = state.review_service.list_for_listing(listing_id).await?;
    Ok(Json(reviews))
}

/// POST /api/reviews
pub async fn create_review(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let review = state.review_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// PUT /api/reviews/{id}
pub async fn update_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateReviewRequest>,
) -> Result<Json<Review>, AppError> {
    let id: ReviewId = parse_id(&id)?;
    let review = state.review_service.update(&auth, id, req.into()).await?;
    Ok(Json(review))
}

/// DELETE /api/reviews/{id}
pub async fn delete_review(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id: ReviewId = parse_id(&id)?;
    state.review_service.delete(&auth, id).await?;
    Ok(Json(MessageResponse::new("Review deleted")))
}
