//! Unified error codes for the Mesa workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 7xxx: Reservation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed (missing or malformed field)
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,

    // ==================== 7xxx: Reservation ====================
    /// Branch id is not in the catalog
    InvalidBranch = 7001,
    /// No table in the branch can seat the party
    NoCapacity = 7002,
    /// Every large-enough table is taken at the requested slot
    SlotConflict = 7003,
    /// Reservation id is unknown
    ReservationNotFound = 7004,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Outbound call to the document-style interface failed
    IntegrationUnavailable = 9101,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",

            // Reservation
            ErrorCode::InvalidBranch => "Unknown branch",
            ErrorCode::NoCapacity => "No table with enough capacity",
            ErrorCode::SlotConflict => "All suitable tables are booked for that slot",
            ErrorCode::ReservationNotFound => "Reservation not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::IntegrationUnavailable => "Reservation service integration unavailable",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),

            // Reservation
            7001 => Ok(ErrorCode::InvalidBranch),
            7002 => Ok(ErrorCode::NoCapacity),
            7003 => Ok(ErrorCode::SlotConflict),
            7004 => Ok(ErrorCode::ReservationNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9101 => Ok(ErrorCode::IntegrationUnavailable),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
