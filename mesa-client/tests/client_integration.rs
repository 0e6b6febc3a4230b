//! Client behaviour against a stub server bound on an ephemeral port

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use mesa_client::{ClientConfig, ClientError, CreateReservationRequest, HttpClient, SoapClient};
use shared::error::{AppError, ErrorCode};
use shared::soap::{SoapFault, SoapMessage, SoapPayload};

async fn soap_stub(body: String) -> impl IntoResponse {
    let request = match SoapMessage::parse(&body) {
        Ok(SoapPayload::Message(message)) => message,
        _ => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                SoapFault::client("bad envelope").to_envelope(),
            );
        }
    };

    let reply = match request.element.as_str() {
        "CreateReservationRequest" if request.field("partySize") == Some("9") => {
            SoapMessage::new("CreateReservationResponse")
                .with_field("reservationId", "")
                .with_field("status", "NoCapacity")
        }
        "CreateReservationRequest" => SoapMessage::new("CreateReservationResponse")
            .with_field("reservationId", "41")
            .with_field("status", "Created"),
        "GetReservationRequest" => SoapMessage::new("GetReservationResponse")
            .with_field("reservationId", request.field("reservationId").unwrap_or_default())
            .with_field("status", "Created")
            .with_field("customerId", "C1")
            .with_field("branchId", "S01")
            .with_field("date", "2024-01-01")
            .with_field("time", "19:00")
            .with_field("partySize", "2")
            .with_field("tableId", "M1"),
        // wrong response element on purpose
        _ => SoapMessage::new("SomethingElse"),
    };
    (StatusCode::OK, reply.to_envelope())
}

async fn missing_reservation() -> impl IntoResponse {
    AppError::with_message(ErrorCode::ReservationNotFound, "Reservation 404 not found")
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/wsdl", post(soap_stub))
        .route("/api/reservations/{id}", get(missing_reservation));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_soap_create_success_and_failure() {
    let base = spawn_stub().await;
    let client = SoapClient::new(format!("{base}/wsdl"), Duration::from_secs(5)).unwrap();

    let ok = client
        .create_reservation(&CreateReservationRequest::new("C1", "S01", "2024-01-01", "19:00", 2))
        .await
        .unwrap();
    assert!(ok.is_created());
    assert_eq!(ok.reservation_id, "41");

    let full = client
        .create_reservation(&CreateReservationRequest::new("C1", "S01", "2024-01-01", "19:00", 9))
        .await
        .unwrap();
    assert!(!full.is_created());
    assert_eq!(full.error_code(), Some(ErrorCode::NoCapacity));
}

#[tokio::test]
async fn test_soap_get_reservation_fields() {
    let base = spawn_stub().await;
    let client = SoapClient::new(format!("{base}/wsdl"), Duration::from_secs(5)).unwrap();

    let reservation = client.get_reservation("12").await.unwrap();
    assert_eq!(reservation.reply.reservation_id, "12");
    assert_eq!(reservation.table_id, "M1");
    assert_eq!(reservation.party_size, Some(2));
}

#[tokio::test]
async fn test_soap_unexpected_element_is_rejected() {
    let base = spawn_stub().await;
    let client = SoapClient::new(format!("{base}/wsdl"), Duration::from_secs(5)).unwrap();

    let err = client.cancel_reservation("1").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)), "{err:?}");
}

#[tokio::test]
async fn test_soap_connection_refused_is_connect_error() {
    // grab a free port and release it so nothing is listening there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SoapClient::new(format!("http://{addr}/wsdl"), Duration::from_secs(2)).unwrap();
    let err = client
        .create_reservation(&CreateReservationRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_connect(), "{err:?}");
}

#[tokio::test]
async fn test_http_error_body_is_decoded() {
    let base = spawn_stub().await;
    let client = HttpClient::new(&ClientConfig::new(base)).unwrap();

    match client.get_reservation("404").await.unwrap_err() {
        ClientError::Api(err) => {
            assert_eq!(err.code, ErrorCode::ReservationNotFound);
            assert_eq!(err.message, "Reservation 404 not found");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}
