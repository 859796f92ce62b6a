//! # staybook-database
//!
//! Persistence for Staybook: storage backends (in-memory and file), the
//! versioned database snapshot with reseeding, and one repository per
//! entity on top of it.

pub mod backend;
pub mod repositories;
pub mod schema;
pub mod seed;
pub mod store;

pub use backend::open_backend;
pub use schema::{Database, SCHEMA_VERSION};
pub use store::{DataStore, OpenOutcome};
