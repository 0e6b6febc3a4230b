//! Unified Result Types

use crate::utils::AppError;

/// Result type for HTTP handlers and adapter logic
pub type AppResult<T> = Result<T, AppError>;
