//! # staybook-api
//!
//! HTTP API layer for Staybook built on Axum.
//!
//! Provides the REST endpoints, middleware (request logging, CORS),
//! extractors (bearer gating, validated JSON), DTOs, and the application
//! builder that wires storage, auth and services together.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
