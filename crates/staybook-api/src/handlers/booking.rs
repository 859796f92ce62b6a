//! Booking handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::debug;

use staybook_core::error::AppError;
use staybook_core::types::BookingId;
use staybook_entity::booking::Booking;

use crate::dto::request::CreateBookingRequest;
use crate::extractors::{AuthUser, ValidatedJson, parse_id};
use crate::state::AppState;

/// GET /api/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.booking_service.list_for_user(&auth).await?;
    Ok(Json(bookings))
}

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let estimate = req.total_price;
    let booking = state.booking_service.create(&auth, req.into()).await?;

    if let Some(estimate) = estimate.filter(|e| *e != booking.total_price) {
        debug!(
            booking_id = %booking.id,
            estimate,
            total = booking.total_price,
            "Client estimate differs from computed total"
        );
    }

    Ok((StatusCode::CREATED, Json(booking)))
}

/// DELETE /api/bookings/{id}
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Booking>, AppError> {
    let id: BookingId = parse_id(&id)?;
    let booking = state.booking_service.cancel(&auth, id).await?;
    Ok(Json(booking))
}
