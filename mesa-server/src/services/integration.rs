//! Integration pathway - REST-initiated reservations placed over SOAP
//!
//! A genuine outbound HTTP call to the document-style endpoint, so the
//! request crosses both codecs. This second network hop has its own
//! failure mode, reported as `IntegrationUnavailable`.
//!
//! Only connection failures are retried: in that case the SOAP adapter
//! never saw the request, so retrying cannot allocate a table twice.

use std::time::Duration;

use mesa_client::{ClientError, ClientResult, SoapClient, SoapReply};
use shared::error::{AppError, AppResult};
use shared::models::ReservationStatus;
use shared::{CreateReservationRequest, ReservationCreated};

use crate::core::Config;

#[derive(Clone, Debug)]
pub struct IntegrationService {
    soap: SoapClient,
    max_attempts: u32,
    backoff: Duration,
}

impl IntegrationService {
    pub fn new(config: &Config) -> ClientResult<Self> {
        let soap = SoapClient::new(config.soap_endpoint(), config.integration_timeout())?;
        Ok(Self {
            soap,
            max_attempts: config.integration_max_attempts.max(1),
            backoff: config.integration_backoff(),
        })
    }

    pub fn endpoint(&self) -> &str {
        self.soap.endpoint()
    }

    /// Validate locally, then create the reservation through the SOAP endpoint
    pub async fn create_reservation(
        &self,
        request: &CreateReservationRequest,
    ) -> AppResult<ReservationCreated> {
        let valid = request.validate()?;
        let canonical = CreateReservationRequest::new(
            valid.customer_id(),
            valid.branch_id(),
            valid.date(),
            valid.time(),
            i64::from(valid.party_size()),
        );

        let mut attempt = 1;
        loop {
            match self.soap.create_reservation(&canonical).await {
                Ok(reply) => return reply_to_result(reply),
                Err(e) if e.is_connect() && attempt < self.max_attempts => {
                    tracing::warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        endpoint = %self.endpoint(),
                        error = %e,
                        "SOAP endpoint unreachable, retrying"
                    );
                    tokio::time::sleep(self.backoff).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!(
                        attempt,
                        endpoint = %self.endpoint(),
                        error = %e,
                        "Integration call failed"
                    );
                    return Err(unavailable(&e));
                }
            }
        }
    }
}

fn reply_to_result(reply: SoapReply) -> AppResult<ReservationCreated> {
    if reply.is_created() {
        return Ok(ReservationCreated {
            reservation_id: reply.reservation_id,
            status: ReservationStatus::Created,
        });
    }

    match reply.error_code() {
        Some(code) => Err(AppError::new(code).with_detail("soapStatus", reply.status)),
        None => Err(AppError::integration_unavailable(format!(
            "Unexpected SOAP reply: reservationId={:?} status={:?}",
            reply.reservation_id, reply.status
        ))),
    }
}

fn unavailable(err: &ClientError) -> AppError {
    let reason = if err.is_timeout() {
        "timed out"
    } else if err.is_connect() {
        "unreachable"
    } else {
        "failed"
    };
    AppError::integration_unavailable(format!("SOAP endpoint {reason}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    fn reply(id: &str, status: &str) -> SoapReply {
        SoapReply {
            reservation_id: id.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_created_reply() {
        let created = reply_to_result(reply("12", "Created")).unwrap();
        assert_eq!(created.reservation_id, "12");
        assert_eq!(created.status, ReservationStatus::Created);
    }

    #[test]
    fn test_business_failure_keeps_its_code() {
        for (status, code) in [
            ("ValidationError", ErrorCode::ValidationFailed),
            ("NoCapacity", ErrorCode::NoCapacity),
            ("SlotConflict", ErrorCode::SlotConflict),
        ] {
            let err = reply_to_result(reply("", status)).unwrap_err();
            assert_eq!(err.code, code);
            assert_eq!(err.details.unwrap()["soapStatus"], status);
        }
    }

    #[test]
    fn test_unrecognised_reply_is_unavailable() {
        let err = reply_to_result(reply("", "Sideways")).unwrap_err();
        assert_eq!(err.code, ErrorCode::IntegrationUnavailable);
    }
}
