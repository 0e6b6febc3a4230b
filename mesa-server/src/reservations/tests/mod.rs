use super::*;
use shared::error::{AppError, ErrorCode};
use shared::models::ReservationStatus;
use shared::{AvailabilityParams, AvailabilityQuery, CreateReservationRequest, NewReservation};

const DATE: &str = "2024-01-01";
const TIME: &str = "19:00";

/// Engine over the built-in catalog (S01 = M1/2, M2/4, M3/4; S02 = M1/2, M2/2)
fn create_test_engine() -> ReservationEngine {
    ReservationEngine::new(Catalog::builtin())
}

fn request_at(customer: &str, branch: &str, date: &str, time: &str, party: i64) -> NewReservation {
    CreateReservationRequest::new(customer, branch, date, time, party)
        .validate()
        .unwrap()
}

/// S01 at the default slot
fn request(customer: &str, party: i64) -> NewReservation {
    request_at(customer, "S01", DATE, TIME, party)
}

fn availability(branch: &str, date: Option<&str>, time: Option<&str>, party: i64) -> AvailabilityQuery {
    AvailabilityParams {
        branch_id: Some(branch.to_string()),
        date: date.map(str::to_string),
        time: time.map(str::to_string),
        party_size: Some(party),
    }
    .validate()
    .unwrap()
}

fn table_ids(tables: &[shared::Table]) -> Vec<&str> {
    tables.iter().map(|t| t.id.as_str()).collect()
}

mod test_lifecycle;
