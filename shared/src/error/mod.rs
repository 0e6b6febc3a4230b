//! Unified error system
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error kinds
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: REST error body
//!
//! Every code maps to exactly one HTTP status and one SOAP status string
//! (see `wire.rs`), so both front-ends surface the same failure the same way.
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 7xxx: Reservation errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::SlotConflict);
//! assert_eq!(err.soap_status(), "SlotConflict");
//! assert_eq!(err.http_status().as_u16(), 409);
//! ```

mod category;
mod codes;
mod types;
mod wire;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
pub use wire::SOAP_STATUS_CREATED;
