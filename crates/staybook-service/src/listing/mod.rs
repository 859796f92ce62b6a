//! Listing lookup, search and creation.

pub mod service;

pub use service::ListingService;
