//! Route handlers, one module per resource.

pub mod auth;
pub mod booking;
pub mod health;
pub mod listing;
pub mod review;
