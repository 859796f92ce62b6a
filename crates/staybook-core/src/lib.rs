//! # staybook-core
//!
//! Core crate for Staybook. Contains the storage and repository traits,
//! configuration schemas, typed identifiers, the API error body, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Staybook crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
