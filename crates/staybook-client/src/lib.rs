//! # staybook-client
//!
//! Client side of Staybook. Requests go through a [`Transport`]; the
//! [`ApiClient`] attaches the access token, renews it once when a call
//! comes back unauthorized, and drives the [`SessionState`] machine. The
//! [`Fetcher`] adds a short-lived response cache with cooperative
//! cancellation on top. [`Favorites`] holds the listings the user starred.

pub mod client;
pub mod error;
pub mod favorites;
pub mod fetch;
pub mod session;
pub mod transport;

pub use client::{ApiClient, AuthPayload, SignUpForm};
pub use error::{ClientError, GENERIC_ERROR_MESSAGE};
pub use favorites::Favorites;
pub use fetch::{FetchSlot, FetchState, Fetcher};
pub use session::{SessionEvent, SessionPhase, SessionState};
pub use transport::{ApiRequest, ApiResponse, RouterTransport, Transport};
