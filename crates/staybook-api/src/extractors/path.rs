//! Typed path parameter helpers.

use std::str::FromStr;

use staybook_core::error::AppError;

/// Parses a numeric id from a path segment.
pub fn parse_id<T: FromStr>(s: &str) -> Result<T, AppError> {
    s.parse::<T>()
        .map_err(|_| AppError::validation(format!("Invalid request: bad id '{s}'")))
}
