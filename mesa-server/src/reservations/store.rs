//! Reservation Store - records by id plus an index of occupied slots
//!
//! Owned by [`super::ReservationEngine`]; nothing else mutates it.

use std::collections::HashMap;

use chrono::Utc;
use serde::Serialize;
use shared::NewReservation;
use shared::models::{Reservation, ReservationStatus};

/// `(branch, date, time)` - one seating at one branch
///
/// Together with a table id this forms the unit that at most one active
/// reservation may hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub branch_id: String,
    pub date: String,
    pub time: String,
}

impl SlotKey {
    pub fn new(branch_id: impl Into<String>, date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            branch_id: branch_id.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    fn of(reservation: &Reservation) -> Self {
        Self::new(&reservation.branch_id, &reservation.date, &reservation.time)
    }
}

/// Record counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub total: usize,
    pub active: usize,
}

#[derive(Debug, Default)]
pub struct ReservationStore {
    reservations: HashMap<String, Reservation>,
    /// slot → (table id → reservation id), active reservations only
    occupied: HashMap<SlotKey, HashMap<String, String>>,
    /// last id handed out
    last_id: u64,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Reservation> {
        self.reservations.get(id)
    }

    /// Whether `table_id` is held by an active reservation at `slot`
    pub fn is_occupied(&self, slot: &SlotKey, table_id: &str) -> bool {
        self.occupied
            .get(slot)
            .is_some_and(|tables| tables.contains_key(table_id))
    }

    /// Record a new active reservation on `table_id`
    ///
    /// The caller has already checked the slot is free.
    pub fn insert(&mut self, request: &NewReservation, table_id: &str) -> Reservation {
        self.last_id += 1;
        let reservation = Reservation {
            id: self.last_id.to_string(),
            customer_id: request.customer_id().to_string(),
            branch_id: request.branch_id().to_string(),
            date: request.date().to_string(),
            time: request.time().to_string(),
            party_size: request.party_size(),
            table_id: table_id.to_string(),
            status: ReservationStatus::Created,
            created_at: Utc::now(),
            cancelled_at: None,
        };

        let previous = self
            .occupied
            .entry(SlotKey::of(&reservation))
            .or_default()
            .insert(reservation.table_id.clone(), reservation.id.clone());
        debug_assert!(previous.is_none(), "slot double-booked");

        self.reservations
            .insert(reservation.id.clone(), reservation.clone());
        reservation
    }

    /// Flip a reservation to `Cancelled` and release its slot
    ///
    /// Already-cancelled reservations are returned unchanged.
    pub fn cancel(&mut self, id: &str) -> Option<Reservation> {
        let reservation = self.reservations.get_mut(id)?;
        if reservation.is_active() {
            reservation.status = ReservationStatus::Cancelled;
            reservation.cancelled_at = Some(Utc::now());

            let slot = SlotKey::of(reservation);
            if let Some(tables) = self.occupied.get_mut(&slot) {
                tables.remove(&reservation.table_id);
                if tables.is_empty() {
                    self.occupied.remove(&slot);
                }
            }
        }
        Some(reservation.clone())
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total: self.reservations.len(),
            active: self.occupied.values().map(HashMap::len).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::CreateReservationRequest;

    fn request(customer: &str, time: &str) -> NewReservation {
        CreateReservationRequest::new(customer, "S01", "2024-01-01", time, 2)
            .validate()
            .unwrap()
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut store = ReservationStore::new();
        let a = store.insert(&request("C1", "19:00"), "M1");
        let b = store.insert(&request("C2", "19:00"), "M2");
        assert_eq!(a.id, "1");
        assert_eq!(b.id, "2");
        assert_eq!(store.get("2").unwrap().customer_id, "C2");
    }

    #[test]
    fn test_occupancy_is_per_slot() {
        let mut store = ReservationStore::new();
        store.insert(&request("C1", "19:00"), "M1");

        let seven = SlotKey::new("S01", "2024-01-01", "19:00");
        let eight = SlotKey::new("S01", "2024-01-01", "20:00");
        assert!(store.is_occupied(&seven, "M1"));
        assert!(!store.is_occupied(&seven, "M2"));
        assert!(!store.is_occupied(&eight, "M1"));
    }

    #[test]
    fn test_cancel_releases_slot_and_keeps_record() {
        let mut store = ReservationStore::new();
        let r = store.insert(&request("C1", "19:00"), "M1");
        let slot = SlotKey::new("S01", "2024-01-01", "19:00");

        let cancelled = store.cancel(&r.id).unwrap();
        assert_eq!(cancelled.status, ReservationStatus::Cancelled);
        assert!(cancelled.cancelled_at.is_some());
        assert!(!store.is_occupied(&slot, "M1"));
        assert_eq!(store.get(&r.id).unwrap().status, ReservationStatus::Cancelled);
        assert_eq!(store.stats(), StoreStats { total: 1, active: 0 });
    }

    #[test]
    fn test_cancel_twice_is_unchanged() {
        let mut store = ReservationStore::new();
        let r = store.insert(&request("C1", "19:00"), "M1");
        let first = store.cancel(&r.id).unwrap();
        let second = store.cancel(&r.id).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cancel_unknown() {
        let mut store = ReservationStore::new();
        assert!(store.cancel("1").is_none());
    }

    #[test]
    fn test_ids_not_reused_after_cancel() {
        let mut store = ReservationStore::new();
        let r = store.insert(&request("C1", "19:00"), "M1");
        store.cancel(&r.id);
        let again = store.insert(&request("C1", "19:00"), "M1");
        assert_eq!(again.id, "2");
        assert_eq!(store.stats(), StoreStats { total: 2, active: 1 });
    }
}
