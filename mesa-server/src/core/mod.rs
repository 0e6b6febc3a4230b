//! Core module - configuration, state and bootstrap errors
//!
//! # Module layout
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared handles held by every adapter
//! - [`Server`] - HTTP listener (REST + SOAP)
//! - [`ServerError`] - bootstrap errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
