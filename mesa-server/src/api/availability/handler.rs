//! Availability API Handlers

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use shared::response::UNSPECIFIED;
use shared::{AvailabilityParams, AvailabilityResponse};

use crate::core::ServerState;
use crate::utils::{AppResult, query_rejection};

/// GET /api/availability?branchId&date&time&partySize
///
/// Without both `date` and `time` the result ignores existing bookings.
pub async fn query(
    State(state): State<ServerState>,
    params: Result<Query<AvailabilityParams>, QueryRejection>,
) -> AppResult<Json<AvailabilityResponse>> {
    let Query(params) = params.map_err(query_rejection)?;
    let query = params.validate()?;
    let available = state.engine.query_availability(&query)?;

    tracing::debug!(
        branch_id = %query.branch_id,
        party_size = query.party_size,
        available = available.len(),
        "Availability queried"
    );

    Ok(Json(AvailabilityResponse {
        branch_id: query.branch_id,
        date: query.date.unwrap_or_else(|| UNSPECIFIED.to_string()),
        time: query.time.unwrap_or_else(|| UNSPECIFIED.to_string()),
        party_size: query.party_size,
        available,
    }))
}
