//! # staybook-auth
//!
//! Authentication for Staybook.
//!
//! ## Modules
//!
//! - `jwt`: signed refresh and access tokens, where an access token wraps
//!   the refresh token it was minted from
//! - `password`: Argon2id password hashing
//! - `session`: sign-in, sign-up, refresh and identity resolution

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenType};
pub use password::PasswordHasher;
pub use session::{IssuedSession, RefreshedSession, SessionManager, SignUp};
