//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use staybook_auth::SessionManager;
use staybook_core::config::AppConfig;
use staybook_database::DataStore;
use staybook_service::{BookingService, ListingService, ReviewService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Persisted snapshot store
    pub store: Arc<DataStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// Sign-in, sign-up, refresh and identity resolution
    pub session_manager: Arc<SessionManager>,

    // ── Services ─────────────────────────────────────────────
    /// Listing service
    pub listing_service: Arc<ListingService>,
    /// Booking service
    pub booking_service: Arc<BookingService>,
    /// Review service
    pub review_service: Arc<ReviewService>,
}
