//! Response types
//!
//! Success bodies of the REST interface. Error bodies use
//! [`crate::error::ApiResponse`].

use serde::{Deserialize, Serialize};

use crate::models::{Reservation, ReservationStatus, Table};

/// Echo value for an availability dimension the caller left out
pub const UNSPECIFIED: &str = "(unspecified)";

/// Outcome of a successful allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreated {
    pub reservation_id: String,
    pub status: ReservationStatus,
}

impl From<&Reservation> for ReservationCreated {
    fn from(reservation: &Reservation) -> Self {
        Self {
            reservation_id: reservation.id.clone(),
            status: reservation.status,
        }
    }
}

/// Outcome of a cancellation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelResponse {
    pub ok: bool,
    pub status: ReservationStatus,
}

/// Availability view of one branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub branch_id: String,
    /// Requested date, or [`UNSPECIFIED`]
    pub date: String,
    /// Requested time, or [`UNSPECIFIED`]
    pub time: String,
    pub party_size: u32,
    pub available: Vec<Table>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_wire_shape() {
        let created = ReservationCreated {
            reservation_id: "7".to_string(),
            status: ReservationStatus::Created,
        };
        let json = serde_json::to_value(&created).unwrap();
        assert_eq!(json, serde_json::json!({"reservationId": "7", "status": "Created"}));
    }

    #[test]
    fn test_availability_wire_shape() {
        let response = AvailabilityResponse {
            branch_id: "S01".to_string(),
            date: UNSPECIFIED.to_string(),
            time: UNSPECIFIED.to_string(),
            party_size: 1,
            available: vec![Table::new("M1", 2)],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["branchId"], "S01");
        assert_eq!(json["partySize"], 1);
        assert_eq!(json["available"][0]["capacity"], 2);
    }
}
