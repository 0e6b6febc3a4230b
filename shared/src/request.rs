//! Request types
//!
//! Raw wire requests deserialize leniently (every field optional) so that
//! a missing field becomes a `ValidationFailed` error instead of a
//! framework-specific rejection. [`CreateReservationRequest::validate`] and
//! [`AvailabilityParams::validate`] produce the strictly typed values the
//! engine accepts.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::validation::{self, MAX_ID_LEN};

/// Inbound reservation request as received on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_size: Option<i64>,
}

impl CreateReservationRequest {
    /// Build a fully populated request
    pub fn new(
        customer_id: impl Into<String>,
        branch_id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        party_size: i64,
    ) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            branch_id: Some(branch_id.into()),
            date: Some(date.into()),
            time: Some(time.into()),
            party_size: Some(party_size),
        }
    }

    /// Check every field and produce the engine-facing request
    pub fn validate(&self) -> AppResult<NewReservation> {
        let customer_id =
            validation::require_text(self.customer_id.as_deref(), "customerId", MAX_ID_LEN)?;
        let branch_id =
            validation::require_text(self.branch_id.as_deref(), "branchId", MAX_ID_LEN)?;
        let date = validation::require_text(self.date.as_deref(), "date", MAX_ID_LEN)?;
        let date = validation::normalize_date(&date, "date")?;
        let time = validation::require_text(self.time.as_deref(), "time", MAX_ID_LEN)?;
        let time = validation::normalize_time(&time, "time")?;
        let party_size = self
            .party_size
            .ok_or_else(|| AppError::invalid_field("partySize", "partySize must not be empty"))?;
        let party_size = validation::party_size(party_size, "partySize")?;

        Ok(NewReservation {
            customer_id,
            branch_id,
            date,
            time,
            party_size,
        })
    }
}

/// Validated reservation request
///
/// Only obtainable through [`CreateReservationRequest::validate`], so the
/// engine never sees an unchecked field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    customer_id: String,
    branch_id: String,
    date: String,
    time: String,
    party_size: u32,
}

impl NewReservation {
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn branch_id(&self) -> &str {
        &self.branch_id
    }

    /// Canonical `YYYY-MM-DD`
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Canonical `HH:MM`
    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn party_size(&self) -> u32 {
        self.party_size
    }
}

/// Availability query as received on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_size: Option<i64>,
}

impl AvailabilityParams {
    /// Check the query; blank date/time count as absent, party size defaults to 1
    pub fn validate(&self) -> AppResult<AvailabilityQuery> {
        let branch_id =
            validation::require_text(self.branch_id.as_deref(), "branchId", MAX_ID_LEN)?;
        let date = non_blank(self.date.as_deref())
            .map(|d| validation::normalize_date(d, "date"))
            .transpose()?;
        let time = non_blank(self.time.as_deref())
            .map(|t| validation::normalize_time(t, "time"))
            .transpose()?;
        let party_size = validation::party_size(self.party_size.unwrap_or(1), "partySize")?;

        Ok(AvailabilityQuery {
            branch_id,
            date,
            time,
            party_size,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validated availability query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub branch_id: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub party_size: u32,
}

impl AvailabilityQuery {
    /// The exact slot to check occupancy against, when both date and time are given
    pub fn slot(&self) -> Option<(&str, &str)> {
        match (&self.date, &self.time) {
            (Some(date), Some(time)) => Some((date.as_str(), time.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_validate_complete_request() {
        let request = CreateReservationRequest::new("C1", " S01 ", "2024-01-01", "19:00", 2);
        let valid = request.validate().unwrap();
        assert_eq!(valid.customer_id(), "C1");
        assert_eq!(valid.branch_id(), "S01");
        assert_eq!(valid.date(), "2024-01-01");
        assert_eq!(valid.time(), "19:00");
        assert_eq!(valid.party_size(), 2);
    }

    #[test]
    fn test_validate_missing_fields() {
        let fields = ["customerId", "branchId", "date", "time", "partySize"];
        for field in fields {
            let mut request = CreateReservationRequest::new("C1", "S01", "2024-01-01", "19:00", 2);
            match field {
                "customerId" => request.customer_id = None,
                "branchId" => request.branch_id = None,
                "date" => request.date = None,
                "time" => request.time = None,
                _ => request.party_size = None,
            }
            let err = request.validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed, "field {field}");
            assert_eq!(err.details.unwrap()["field"], field);
        }
    }

    #[test]
    fn test_validate_rejects_non_positive_party() {
        let request = CreateReservationRequest::new("C1", "S01", "2024-01-01", "19:00", 0);
        assert_eq!(request.validate().unwrap_err().code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_request_deserialize_partial() {
        let request: CreateReservationRequest =
            serde_json::from_str(r#"{"customerId":"C1","partySize":3}"#).unwrap();
        assert_eq!(request.customer_id.as_deref(), Some("C1"));
        assert_eq!(request.party_size, Some(3));
        assert!(request.branch_id.is_none());
    }

    #[test]
    fn test_availability_defaults() {
        let params = AvailabilityParams {
            branch_id: Some("S01".to_string()),
            ..Default::default()
        };
        let query = params.validate().unwrap();
        assert_eq!(query.party_size, 1);
        assert!(query.slot().is_none());
    }

    #[test]
    fn test_availability_slot_needs_both_dimensions() {
        let params = AvailabilityParams {
            branch_id: Some("S01".to_string()),
            date: Some("2024-01-01".to_string()),
            time: Some("".to_string()),
            party_size: Some(2),
        };
        let query = params.validate().unwrap();
        assert_eq!(query.date.as_deref(), Some("2024-01-01"));
        assert!(query.time.is_none());
        assert!(query.slot().is_none());

        let params = AvailabilityParams {
            time: Some("19:00".to_string()),
            ..params
        };
        assert_eq!(
            params.validate().unwrap().slot(),
            Some(("2024-01-01", "19:00"))
        );
    }

    #[test]
    fn test_availability_requires_branch() {
        let err = AvailabilityParams::default().validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
