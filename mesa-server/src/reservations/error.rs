use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Allocation engine errors
///
/// Every variant is an expected outcome handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    /// Create named a branch outside the catalog; a request validation failure
    #[error("Unknown branch: {0}")]
    UnknownBranchOnCreate(String),

    #[error("Unknown branch: {0}")]
    InvalidBranch(String),

    #[error("No table in branch {branch_id} seats {party_size}")]
    NoCapacity { branch_id: String, party_size: u32 },

    #[error("Every table for {party_size} at {branch_id} is booked on {date} {time}")]
    SlotConflict {
        branch_id: String,
        date: String,
        time: String,
        party_size: u32,
    },

    #[error("Reservation not found: {0}")]
    NotFound(String),
}

impl ReservationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownBranchOnCreate(_) => ErrorCode::ValidationFailed,
            Self::InvalidBranch(_) => ErrorCode::InvalidBranch,
            Self::NoCapacity { .. } => ErrorCode::NoCapacity,
            Self::SlotConflict { .. } => ErrorCode::SlotConflict,
            Self::NotFound(_) => ErrorCode::ReservationNotFound,
        }
    }
}

impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        let message = err.to_string();
        let app = AppError::with_message(err.code(), message);
        match err {
            ReservationError::UnknownBranchOnCreate(branch) => app
                .with_detail("field", "branchId")
                .with_detail("branchId", branch),
            ReservationError::InvalidBranch(branch) => app.with_detail("branchId", branch),
            ReservationError::NoCapacity {
                branch_id,
                party_size,
            } => app
                .with_detail("branchId", branch_id)
                .with_detail("partySize", party_size),
            ReservationError::SlotConflict {
                branch_id,
                date,
                time,
                party_size,
            } => app
                .with_detail("branchId", branch_id)
                .with_detail("date", date)
                .with_detail("time", time)
                .with_detail("partySize", party_size),
            ReservationError::NotFound(id) => app.with_detail("reservationId", id),
        }
    }
}

pub type ReservationResult<T> = Result<T, ReservationError>;
