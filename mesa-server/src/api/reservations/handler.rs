//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::{CancelResponse, CreateReservationRequest, Reservation, ReservationCreated};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, json_rejection};

/// POST /api/reservations - allocate a table
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ReservationCreated>)> {
    let Json(payload) = payload.map_err(json_rejection)?;
    let request = payload.validate()?;

    let reservation = state.engine.create_reservation(&request).map_err(|e| {
        tracing::info!(
            branch_id = %request.branch_id(),
            date = %request.date(),
            time = %request.time(),
            party_size = request.party_size(),
            error = %e,
            "Reservation rejected"
        );
        AppError::from(e)
    })?;

    tracing::info!(
        reservation_id = %reservation.id,
        branch_id = %reservation.branch_id,
        table_id = %reservation.table_id,
        "Reservation created"
    );

    Ok((StatusCode::CREATED, Json(ReservationCreated::from(&reservation))))
}

/// GET /api/reservations/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let reservation = state.engine.get_reservation(&id)?;
    Ok(Json(reservation))
}

/// DELETE /api/reservations/{id} - cancel, releasing the table
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CancelResponse>> {
    let reservation = state.engine.cancel_reservation(&id)?;
    tracing::info!(reservation_id = %id, "Reservation cancelled");

    Ok(Json(CancelResponse {
        ok: true,
        status: reservation.status,
    }))
}
