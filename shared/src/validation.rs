//! Input validation helpers
//!
//! Centralized length limits and field checks shared by both front-ends,
//! so a malformed request is rejected the same way whichever protocol it
//! arrived on.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{AppError, AppResult};

// ── Limits ──────────────────────────────────────────────────────────

/// Short identifiers: customer id, branch id, reservation id
pub const MAX_ID_LEN: usize = 100;

/// Largest party accepted at the front door
pub const MAX_PARTY_SIZE: i64 = 1000;

/// Wire format of a reservation date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format of a reservation time
pub const TIME_FORMAT: &str = "%H:%M";

// ── Helpers ─────────────────────────────────────────────────────────

/// Validate that a required string is present, non-empty and within the length limit.
///
/// Returns the trimmed value.
pub fn require_text(value: Option<&str>, field: &str, max_len: usize) -> AppResult<String> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must not be empty"),
        ));
    }
    if value.len() > max_len {
        return Err(AppError::invalid_field(
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        ));
    }
    Ok(value.to_string())
}

/// Parse a date and return it in canonical `YYYY-MM-DD` form.
pub fn normalize_date(value: &str, field: &str) -> AppResult<String> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| {
            AppError::invalid_field(field, format!("{field} must be a date in YYYY-MM-DD form"))
                .with_detail("value", value)
        })
}

/// Parse a time of day and return it in canonical `HH:MM` form.
pub fn normalize_time(value: &str, field: &str) -> AppResult<String> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map(|t| t.format(TIME_FORMAT).to_string())
        .map_err(|_| {
            AppError::invalid_field(field, format!("{field} must be a time in HH:MM form"))
                .with_detail("value", value)
        })
}

/// Validate a party size: positive and within [`MAX_PARTY_SIZE`].
pub fn party_size(value: i64, field: &str) -> AppResult<u32> {
    if value <= 0 {
        return Err(
            AppError::invalid_field(field, format!("{field} must be greater than zero"))
                .with_detail("value", value),
        );
    }
    if value > MAX_PARTY_SIZE {
        return Err(AppError::invalid_field(
            field,
            format!("{field} must not exceed {MAX_PARTY_SIZE}"),
        )
        .with_detail("value", value));
    }
    // bounded above, cannot truncate
    Ok(value as u32)
}
