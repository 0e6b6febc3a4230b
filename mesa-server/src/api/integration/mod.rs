//! Integration API - create a reservation through the SOAP endpoint

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/integration/reservations", post(handler::create))
}
