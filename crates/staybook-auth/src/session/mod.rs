//! Session lifecycle: sign-in, sign-up, refresh, and identity resolution.

pub mod manager;

pub use manager::{IssuedSession, RefreshedSession, SessionManager, SignUp};
