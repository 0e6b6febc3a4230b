//! Reservation allocation engine
//!
//! - [`Catalog`]: static branch → table inventory
//! - [`ReservationStore`]: authoritative reservation records + active-slot index
//! - [`ReservationEngine`]: decides which table satisfies a request
//!
//! # Create Flow
//!
//! ```text
//! create_reservation(req)
//!     ├─ 1. Branch known?              (no  → UnknownBranchOnCreate)
//!     ├─ 2. Any table seats the party? (no  → NoCapacity)
//!     ├─ 3. Take the store write lock
//!     ├─ 4. First catalog-order fitting table free at the slot
//!     │                                (none → SlotConflict)
//!     ├─ 5. Insert reservation, index the slot
//!     └─ 6. Release lock, return reservation
//! ```
//!
//! Steps 4 and 5 run under one lock, so two concurrent requests can never
//! both see a table as free.

mod catalog;
mod engine;
mod error;
mod store;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogError};
pub use engine::ReservationEngine;
pub use error::{ReservationError, ReservationResult};
pub use store::{ReservationStore, SlotKey, StoreStats};
