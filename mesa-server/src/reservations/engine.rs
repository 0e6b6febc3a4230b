//! Reservation Engine - table allocation over the catalog and store

use std::sync::Arc;

use parking_lot::RwLock;
use shared::models::{Reservation, Table};
use shared::{AvailabilityQuery, NewReservation};

use super::catalog::Catalog;
use super::error::{ReservationError, ReservationResult};
use super::store::{ReservationStore, SlotKey, StoreStats};

/// Allocation engine shared by every front-end
///
/// Both the REST and the SOAP adapter hold the same instance, so a
/// reservation made through one is visible through the other.
#[derive(Debug)]
pub struct ReservationEngine {
    catalog: Arc<Catalog>,
    store: RwLock<ReservationStore>,
}

impl ReservationEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store: RwLock::new(ReservationStore::new()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Tables of a branch that can seat the party
    ///
    /// Occupancy is only taken into account when the query names both a
    /// date and a time; otherwise every table large enough is returned.
    pub fn query_availability(&self, query: &AvailabilityQuery) -> ReservationResult<Vec<Table>> {
        let branch = self
            .catalog
            .branch(&query.branch_id)
            .ok_or_else(|| ReservationError::InvalidBranch(query.branch_id.clone()))?;

        let fitting = branch.tables.iter().filter(|t| t.seats(query.party_size));

        let Some((date, time)) = query.slot() else {
            return Ok(fitting.cloned().collect());
        };

        let slot = SlotKey::new(&query.branch_id, date, time);
        let store = self.store.read();
        Ok(fitting
            .filter(|t| !store.is_occupied(&slot, &t.id))
            .cloned()
            .collect())
    }

    /// Allocate the first free table, in catalog order, that seats the party
    pub fn create_reservation(&self, request: &NewReservation) -> ReservationResult<Reservation> {
        let branch_id = request.branch_id();
        let Some(branch) = self.catalog.branch(branch_id) else {
            return Err(ReservationError::UnknownBranchOnCreate(branch_id.to_string()));
        };

        let party_size = request.party_size();
        if !branch.tables.iter().any(|t| t.seats(party_size)) {
            return Err(ReservationError::NoCapacity {
                branch_id: branch_id.to_string(),
                party_size,
            });
        }

        let slot = SlotKey::new(branch_id, request.date(), request.time());

        // Occupancy check and insert must share one write guard
        let mut store = self.store.write();
        let table = branch
            .tables
            .iter()
            .find(|t| t.seats(party_size) && !store.is_occupied(&slot, &t.id))
            .ok_or_else(|| ReservationError::SlotConflict {
                branch_id: branch_id.to_string(),
                date: request.date().to_string(),
                time: request.time().to_string(),
                party_size,
            })?;

        Ok(store.insert(request, &table.id))
    }

    pub fn get_reservation(&self, id: &str) -> ReservationResult<Reservation> {
        self.store
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| ReservationError::NotFound(id.to_string()))
    }

    /// Cancel a reservation, releasing its slot
    ///
    /// Cancelling twice is not an error and leaves the record untouched.
    pub fn cancel_reservation(&self, id: &str) -> ReservationResult<Reservation> {
        self.store
            .write()
            .cancel(id)
            .ok_or_else(|| ReservationError::NotFound(id.to_string()))
    }

    pub fn stats(&self) -> StoreStats {
        self.store.read().stats()
    }
}
