//! Mesa Client - network clients for the reservation service
//!
//! - [`HttpClient`]: the REST interface
//! - [`SoapClient`]: the document-style (SOAP) interface

pub mod config;
pub mod error;
pub mod http;
pub mod soap;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use soap::{SoapClient, SoapReply, SoapReservation};

// Re-export shared types for convenience
pub use shared::{
    AvailabilityParams, AvailabilityResponse, CancelResponse, CreateReservationRequest,
    Reservation, ReservationCreated, ReservationStatus,
};
