//! Repository implementations, one per entity, all backed by the shared
//! [`DataStore`](crate::store::DataStore).

pub mod booking;
pub mod listing;
pub mod location;
pub mod review;
pub mod user;

pub use booking::{BookingRepository, NewBooking};
pub use listing::ListingRepository;
pub use location::LocationRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;
