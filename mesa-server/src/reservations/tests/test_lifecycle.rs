use super::*;

#[test]
fn test_cancel_frees_table_for_rebooking() {
    let engine = create_test_engine();
    let first = engine.create_reservation(&request("C1", 2)).unwrap();
    assert_eq!(first.table_id, "M1");

    let cancelled = engine.cancel_reservation(&first.id).unwrap();
    assert_eq!(cancelled.status, ReservationStatus::Cancelled);

    let again = engine.create_reservation(&request("C1", 2)).unwrap();
    assert_eq!(again.table_id, "M1");
    assert_ne!(again.id, first.id);
}

#[test]
fn test_cancel_is_idempotent() {
    let engine = create_test_engine();
    let r = engine.create_reservation(&request("C1", 2)).unwrap();

    let first = engine.cancel_reservation(&r.id).unwrap();
    let second = engine.cancel_reservation(&r.id).unwrap();
    assert_eq!(first.status, ReservationStatus::Cancelled);
    assert_eq!(first.cancelled_at, second.cancelled_at);
    assert_eq!(first, second);
}

#[test]
fn test_cancelled_reservation_stays_visible() {
    let engine = create_test_engine();
    let r = engine.create_reservation(&request("C1", 2)).unwrap();
    engine.cancel_reservation(&r.id).unwrap();

    let fetched = engine.get_reservation(&r.id).unwrap();
    assert_eq!(fetched.status, ReservationStatus::Cancelled);
    assert_eq!(fetched.table_id, "M1");
    assert_eq!(fetched.customer_id, "C1");
    assert!(fetched.cancelled_at.is_some());
}

#[test]
fn test_cancel_of_rebooked_table_keeps_new_booking() {
    let engine = create_test_engine();
    let old = engine.create_reservation(&request("C1", 2)).unwrap();
    engine.cancel_reservation(&old.id).unwrap();
    let new = engine.create_reservation(&request("C2", 2)).unwrap();
    assert_eq!(new.table_id, "M1");

    // Re-cancelling the old one must not release the new holder's table
    engine.cancel_reservation(&old.id).unwrap();
    let tables = engine
        .query_availability(&availability("S01", Some(DATE), Some(TIME), 2))
        .unwrap();
    assert_eq!(table_ids(&tables), ["M2", "M3"]);
}

#[test]
fn test_get_returns_created_record() {
    let engine = create_test_engine();
    let r = engine.create_reservation(&request("C7", 3)).unwrap();
    let fetched = engine.get_reservation(&r.id).unwrap();
    assert_eq!(fetched, r);
}

#[test]
fn test_unknown_id() {
    let engine = create_test_engine();
    assert_eq!(
        engine.get_reservation("42").unwrap_err(),
        ReservationError::NotFound("42".to_string())
    );
    let err = engine.cancel_reservation("42").unwrap_err();
    assert_eq!(err.code(), ErrorCode::ReservationNotFound);
}

#[test]
fn test_ids_are_unique_and_ordered() {
    let engine = create_test_engine();
    let ids: Vec<String> = (0..3)
        .map(|_| engine.create_reservation(&request("C1", 1)).unwrap().id)
        .collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn test_stats_track_active() {
    let engine = create_test_engine();
    let a = engine.create_reservation(&request("C1", 2)).unwrap();
    engine.create_reservation(&request("C2", 2)).unwrap();
    engine.cancel_reservation(&a.id).unwrap();
    assert_eq!(engine.stats(), StoreStats { total: 2, active: 1 });
}
