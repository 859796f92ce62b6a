//! Route definitions for the Staybook HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the API router. Middleware layers are added by
/// [`build_app`](crate::app::build_app).
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(listing_routes())
        .merge(review_routes())
        .merge(booking_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Auth endpoints: me, sign-in, sign-up, refresh, sign-out
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(handlers::auth::me))
        .route("/signin", post(handlers::auth::sign_in))
        .route("/signup", post(handlers::auth::sign_up))
        .route("/refreshToken", get(handlers::auth::refresh))
        .route("/signout", post(handlers::auth::sign_out))
}

/// Listing lookup, search and creation
fn listing_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/listings",
            get(handlers::listing::list_listings).post(handlers::listing::create_listing),
        )
        .route("/listings/featured", get(handlers::listing::featured_listings))
        .route("/listings/public", get(handlers::listing::public_listings))
        .route("/listings/{id}", get(handlers::listing::get_listing))
}

/// Reviews
fn review_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reviews",
            get(handlers::review::list_reviews).post(handlers::review::create_review),
        )
        .route(
            "/reviews/{id}",
            put(handlers::review::update_review).delete(handlers::review::delete_review),
        )
}

/// The caller's bookings
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bookings",
            get(handlers::booking::list_bookings).post(handlers::booking::create_booking),
        )
        .route("/bookings/{id}", delete(handlers::booking::cancel_booking))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
