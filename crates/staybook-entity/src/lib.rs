//! # staybook-entity
//!
//! Domain entity models for Staybook. Every struct in this crate is either
//! a row of the persisted snapshot or a domain value object. Entities
//! derive `Debug`, `Clone`, `Serialize` and `Deserialize` and use the
//! camelCase JSON field names of the wire format.

pub mod booking;
pub mod listing;
pub mod location;
pub mod review;
pub mod user;
