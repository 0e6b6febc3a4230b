//! Integration API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::{CreateReservationRequest, ReservationCreated};

use crate::core::ServerState;
use crate::utils::{AppResult, json_rejection};

/// POST /api/integration/reservations
///
/// Same body and outcomes as `POST /api/reservations`, plus 502 when the
/// SOAP endpoint cannot be reached.
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ReservationCreated>)> {
    let Json(payload) = payload.map_err(json_rejection)?;
    let created = state.integration.create_reservation(&payload).await?;

    tracing::info!(
        reservation_id = %created.reservation_id,
        endpoint = %state.integration.endpoint(),
        "Reservation created via SOAP integration"
    );

    Ok((StatusCode::CREATED, Json(created)))
}
