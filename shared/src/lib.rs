//! Shared types for the Mesa reservation workspace
//!
//! Common types used by both the server and the client crates: domain
//! models, wire request/response shapes, request validation, the unified
//! error-code table and the SOAP envelope codec.

pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod soap;
pub mod validation;

pub use models::{Branch, Reservation, ReservationStatus, Table};
pub use request::{AvailabilityParams, AvailabilityQuery, CreateReservationRequest, NewReservation};
pub use response::{AvailabilityResponse, CancelResponse, ReservationCreated};
