//! Utilities
//!
//! - [`AppError`] / [`AppResult`] - unified error type (from `shared::error`)
//! - extractor rejection mapping
//! - logging setup

pub mod error;
pub mod logger;
pub mod result;

pub use error::{ApiResponse, AppError, ErrorCategory, ErrorCode, json_rejection, query_rejection};
pub use result::AppResult;
