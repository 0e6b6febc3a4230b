//! SOAP client for the document-style interface

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use shared::CreateReservationRequest;
use shared::error::{ErrorCode, SOAP_STATUS_CREATED};
use shared::soap::{self, Operation, SoapMessage, SoapPayload};

use crate::{ClientError, ClientResult};

/// `reservationId` + `status` pair returned by create and cancel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapReply {
    /// Empty when the operation failed
    pub reservation_id: String,
    pub status: String,
}

impl SoapReply {
    fn from_message(message: &SoapMessage) -> Self {
        Self {
            reservation_id: message.field("reservationId").unwrap_or_default().to_string(),
            status: message.field("status").unwrap_or_default().to_string(),
        }
    }

    /// Whether a reservation was created
    pub fn is_created(&self) -> bool {
        !self.reservation_id.is_empty() && self.status == SOAP_STATUS_CREATED
    }

    /// Error code named by the status, if it names one
    pub fn error_code(&self) -> Option<ErrorCode> {
        if self.reservation_id.is_empty() {
            ErrorCode::from_soap_status(&self.status)
        } else {
            None
        }
    }
}

/// Reservation as returned by `GetReservation`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapReservation {
    pub reply: SoapReply,
    pub customer_id: String,
    pub branch_id: String,
    pub date: String,
    pub time: String,
    pub party_size: Option<u32>,
    pub table_id: String,
}

/// Client for the SOAP endpoint (`POST /wsdl`)
#[derive(Debug, Clone)]
pub struct SoapClient {
    client: Client,
    endpoint: String,
}

impl SoapClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one request message and decode the matching response message
    pub async fn call(&self, op: Operation, message: SoapMessage) -> ClientResult<SoapMessage> {
        tracing::debug!(operation = op.name(), endpoint = %self.endpoint, "SOAP call");
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, soap::CONTENT_TYPE)
            .header("SOAPAction", format!("\"{}\"", op.name()))
            .body(message.to_envelope())
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        let payload = match SoapMessage::parse(&text) {
            Ok(payload) => payload,
            Err(_) if !status.is_success() => {
                return Err(ClientError::InvalidResponse(format!("HTTP {status}")));
            }
            Err(e) => return Err(e.into()),
        };

        match payload {
            SoapPayload::Fault(fault) => Err(ClientError::Fault {
                code: fault.code,
                message: fault.message,
            }),
            SoapPayload::Message(reply) if reply.element == op.response_element() => Ok(reply),
            SoapPayload::Message(reply) => Err(ClientError::InvalidResponse(format!(
                "expected {}, got {}",
                op.response_element(),
                reply.element
            ))),
        }
    }

    /// CreateReservation
    ///
    /// Absent request fields are omitted from the envelope; the service then
    /// answers with a `ValidationError` status.
    pub async fn create_reservation(&self, request: &CreateReservationRequest) -> ClientResult<SoapReply> {
        let op = Operation::CreateReservation;
        let message = SoapMessage::new(op.request_element())
            .with_optional_field("customerId", request.customer_id.as_deref())
            .with_optional_field("branchId", request.branch_id.as_deref())
            .with_optional_field("date", request.date.as_deref())
            .with_optional_field("time", request.time.as_deref())
            .with_optional_field("partySize", request.party_size.map(|n| n.to_string()));
        let reply = self.call(op, message).await?;
        Ok(SoapReply::from_message(&reply))
    }

    /// GetReservation
    pub async fn get_reservation(&self, id: &str) -> ClientResult<SoapReservation> {
        let op = Operation::GetReservation;
        let message = SoapMessage::new(op.request_element()).with_field("reservationId", id);
        let reply = self.call(op, message).await?;
        let text = |name: &str| reply.field(name).unwrap_or_default().to_string();

        Ok(SoapReservation {
            reply: SoapReply::from_message(&reply),
            customer_id: text("customerId"),
            branch_id: text("branchId"),
            date: text("date"),
            time: text("time"),
            party_size: reply.field("partySize").and_then(|n| n.parse().ok()),
            table_id: text("tableId"),
        })
    }

    /// CancelReservation
    pub async fn cancel_reservation(&self, id: &str) -> ClientResult<SoapReply> {
        let op = Operation::CancelReservation;
        let message = SoapMessage::new(op.request_element()).with_field("reservationId", id);
        let reply = self.call(op, message).await?;
        Ok(SoapReply::from_message(&reply))
    }
}
