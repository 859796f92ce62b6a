//! Booking creation, pricing and cancellation.

pub mod pricing;
pub mod service;

pub use pricing::{CLEANING_FEE, MAX_NIGHTLY_PRICE, PriceBreakdown, SERVICE_FEE_PERCENT, quote};
pub use service::BookingService;
