//! SOAP Handlers

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use shared::error::{AppError, AppResult, SOAP_STATUS_CREATED};
use shared::soap::{self, Operation, SoapFault, SoapMessage, SoapPayload};
use shared::validation::{self, MAX_ID_LEN};
use shared::{CreateReservationRequest, Reservation};

use crate::core::ServerState;

fn xml(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, soap::CONTENT_TYPE)], body).into_response()
}

fn fault(fault: SoapFault) -> Response {
    xml(StatusCode::INTERNAL_SERVER_ERROR, fault.to_envelope())
}

/// GET /wsdl
///
/// The advertised address follows the Host header the caller used.
pub async fn wsdl(State(state): State<ServerState>, headers: HeaderMap) -> Response {
    let endpoint = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(|host| format!("http://{host}/wsdl"))
        .unwrap_or_else(|| state.config.soap_endpoint());

    xml(StatusCode::OK, soap::wsdl_document(&endpoint))
}

/// POST /wsdl
pub async fn dispatch(State(state): State<ServerState>, body: String) -> Response {
    let message = match SoapMessage::parse(&body) {
        Ok(SoapPayload::Message(message)) => message,
        Ok(SoapPayload::Fault(_)) => {
            return fault(SoapFault::client("A fault is not a request"));
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rejected SOAP envelope");
            return fault(SoapFault::client(e.to_string()));
        }
    };

    let Some(op) = Operation::from_request_element(&message.element) else {
        tracing::warn!(element = %message.element, "Unknown SOAP operation");
        return fault(SoapFault::client(format!(
            "Unknown operation: {}",
            message.element
        )));
    };

    let reply = match op {
        Operation::CreateReservation => create(&state, &message),
        Operation::GetReservation => get(&state, &message),
        Operation::CancelReservation => cancel(&state, &message),
    };

    let reply = reply.unwrap_or_else(|err| {
        tracing::info!(
            operation = op.name(),
            status = err.soap_status(),
            error = %err,
            "SOAP operation failed"
        );
        failure(op, &err)
    });

    xml(StatusCode::OK, reply.to_envelope())
}

/// Response carrying no reservation and the error's status
fn failure(op: Operation, err: &AppError) -> SoapMessage {
    SoapMessage::new(op.response_element())
        .with_field("reservationId", "")
        .with_field("status", err.soap_status())
}

/// Rebuild the wire request from message fields
///
/// Absent fields stay absent so the shared validator reports them.
fn create_request(message: &SoapMessage) -> AppResult<CreateReservationRequest> {
    let text = |name: &str| message.field(name).map(str::to_string);

    let party_size = match message.field("partySize").map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(raw.parse::<i64>().map_err(|_| {
            AppError::invalid_field("partySize", "partySize must be an integer")
        })?),
        _ => None,
    };

    Ok(CreateReservationRequest {
        customer_id: text("customerId"),
        branch_id: text("branchId"),
        date: text("date"),
        time: text("time"),
        party_size,
    })
}

fn reservation_id(message: &SoapMessage) -> AppResult<String> {
    validation::require_text(message.field("reservationId"), "reservationId", MAX_ID_LEN)
}

fn create(state: &ServerState, message: &SoapMessage) -> AppResult<SoapMessage> {
    let request = create_request(message)?.validate()?;
    let reservation = state.engine.create_reservation(&request)?;

    tracing::info!(
        reservation_id = %reservation.id,
        branch_id = %reservation.branch_id,
        table_id = %reservation.table_id,
        "Reservation created via SOAP"
    );

    Ok(SoapMessage::new(Operation::CreateReservation.response_element())
        .with_field("reservationId", reservation.id)
        .with_field("status", SOAP_STATUS_CREATED))
}

fn get(state: &ServerState, message: &SoapMessage) -> AppResult<SoapMessage> {
    let id = reservation_id(message)?;
    let reservation = state.engine.get_reservation(&id)?;
    Ok(reservation_message(reservation))
}

fn reservation_message(r: Reservation) -> SoapMessage {
    SoapMessage::new(Operation::GetReservation.response_element())
        .with_field("reservationId", r.id)
        .with_field("status", r.status.as_str())
        .with_field("customerId", r.customer_id)
        .with_field("branchId", r.branch_id)
        .with_field("date", r.date)
        .with_field("time", r.time)
        .with_field("partySize", r.party_size.to_string())
        .with_field("tableId", r.table_id)
}

fn cancel(state: &ServerState, message: &SoapMessage) -> AppResult<SoapMessage> {
    let id = reservation_id(message)?;
    let reservation = state.engine.cancel_reservation(&id)?;
    tracing::info!(reservation_id = %id, "Reservation cancelled via SOAP");

    Ok(SoapMessage::new(Operation::CancelReservation.response_element())
        .with_field("reservationId", reservation.id)
        .with_field("status", reservation.status.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_create_request_keeps_missing_fields_absent() {
        let message = SoapMessage::new("CreateReservationRequest")
            .with_field("customerId", "C1")
            .with_field("partySize", "3");
        let request = create_request(&message).unwrap();
        assert_eq!(request.customer_id.as_deref(), Some("C1"));
        assert_eq!(request.party_size, Some(3));
        assert!(request.branch_id.is_none());

        let err = request.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_non_numeric_party_size() {
        let message = SoapMessage::new("CreateReservationRequest").with_field("partySize", "two");
        let err = create_request(&message).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.unwrap()["field"], "partySize");
    }

    #[test]
    fn test_failure_message_shape() {
        let err = AppError::new(ErrorCode::SlotConflict);
        let message = failure(Operation::CreateReservation, &err);
        assert_eq!(message.element, "CreateReservationResponse");
        assert_eq!(message.field("reservationId"), Some(""));
        assert_eq!(message.field("status"), Some("SlotConflict"));
    }
}
