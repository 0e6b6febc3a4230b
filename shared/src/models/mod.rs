//! Data models
//!
//! Shared between the reservation server and its clients (via API).
//! Wire names are camelCase to match both protocol front-ends.

pub mod reservation;
pub mod table;

// Re-exports
pub use reservation::*;
pub use table::*;
