//! Reservation Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reservation lifecycle status
///
/// `Cancelled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    Created,
    Cancelled,
}

impl ReservationStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Whether this reservation still occupies its slot
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Created)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation entity
///
/// Created only by a successful allocation, mutated only by cancellation,
/// never removed while the process runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub customer_id: String,
    pub branch_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub party_size: u32,
    pub table_id: String,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialize() {
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Created).unwrap(),
            "\"Created\""
        );
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Cancelled).unwrap(),
            "\"Cancelled\""
        );
    }

    #[test]
    fn test_status_active() {
        assert!(ReservationStatus::Created.is_active());
        assert!(!ReservationStatus::Cancelled.is_active());
        assert_eq!(ReservationStatus::Cancelled.to_string(), "Cancelled");
    }

    #[test]
    fn test_reservation_wire_names() {
        let reservation = Reservation {
            id: "1".to_string(),
            customer_id: "C1".to_string(),
            branch_id: "S01".to_string(),
            date: "2024-01-01".to_string(),
            time: "19:00".to_string(),
            party_size: 2,
            table_id: "M1".to_string(),
            status: ReservationStatus::Created,
            created_at: Utc::now(),
            cancelled_at: None,
        };
        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["customerId"], "C1");
        assert_eq!(json["tableId"], "M1");
        assert_eq!(json["partySize"], 2);
        assert!(json.get("cancelledAt").is_none());
    }
}
