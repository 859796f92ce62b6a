//! Listing entity, availability ranges, and search filters.

pub mod availability;
pub mod filter;
pub mod model;

pub use availability::DateRange;
pub use filter::{ListingFilters, PublicListingParams};
pub use model::{CreateListing, Listing, ListingWithLocation};
