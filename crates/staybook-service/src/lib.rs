//! # staybook-service
//!
//! Business logic service layer for Staybook. Each service validates its
//! input and orchestrates the repositories to implement one use case.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod booking;
pub mod context;
pub mod listing;
pub mod review;

pub use booking::{BookingService, PriceBreakdown, quote};
pub use context::RequestContext;
pub use listing::ListingService;
pub use review::ReviewService;
