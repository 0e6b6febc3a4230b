//! SOAP adapter - the document-style interface at `/wsdl`
//!
//! | Path | Method | Result |
//! |------|--------|--------|
//! | /wsdl | GET | WSDL document (`?wsdl` accepted) |
//! | /wsdl | POST | SOAP 1.1 envelope in, envelope out |
//!
//! Business failures come back as a normal response with an empty
//! `reservationId` and the error's SOAP status. Envelopes that cannot be
//! decoded, or name an unknown operation, get a `soap:Client` fault.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/wsdl", get(handler::wsdl).post(handler::dispatch))
}
