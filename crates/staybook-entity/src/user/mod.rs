//! User entity and its public projection.

pub mod model;
pub mod profile;

pub use model::{CreateUser, User};
pub use profile::UserProfile;
