//! Convenience result type alias for Staybook.

use crate::error::AppError;

/// A specialized `Result` type for Staybook operations.
pub type AppResult<T> = Result<T, AppError>;
