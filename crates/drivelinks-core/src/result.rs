//! Convenience result type alias for DriveLinks.

use crate::error::AppError;

/// A specialized `Result` type for DriveLinks operations.
pub type AppResult<T> = Result<T, AppError>;
