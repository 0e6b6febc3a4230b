//! REST adapter
//!
//! # Routes
//!
//! | Path | Method | Module |
//! |------|--------|--------|
//! | /health | GET | [`health`] |
//! | /api/availability | GET | [`availability`] |
//! | /api/reservations | POST | [`reservations`] |
//! | /api/reservations/{id} | GET, DELETE | [`reservations`] |
//! | /api/integration/reservations | POST | [`integration`] |
//!
//! Error bodies are [`shared::error::ApiResponse`] with the HTTP status
//! taken from the error code.

pub mod availability;
pub mod health;
pub mod integration;
pub mod reservations;
