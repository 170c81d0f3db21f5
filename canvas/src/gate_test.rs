use super::*;

// =============================================================
// Acquire / release
// =============================================================

#[test]
fn new_gate_is_idle() {
    let gate = InflightGate::new();
    assert!(!gate.is_busy());
    assert!(!gate.is_closed());
    assert_eq!(gate.current(), None);
    assert_eq!(gate.dropped(), 0);
}

#[test]
fn acquire_holds_slot() {
    let mut gate = InflightGate::new();
    let t = gate.try_acquire().unwrap();
    assert!(gate.is_busy());
    assert_eq!(gate.current(), Some(t));
}

#[test]
fn second_acquire_while_busy_is_dropped() {
    let mut gate = InflightGate::new();
    let _first = gate.try_acquire().unwrap();
    assert!(gate.try_acquire().is_none());
    assert!(gate.try_acquire().is_none());
    assert_eq!(gate.dropped(), 2);
}

#[test]
fn release_frees_slot_for_next_ticket() {
    let mut gate = InflightGate::new();
    let a = gate.try_acquire().unwrap();
    assert!(gate.release(a));
    let b = gate.try_acquire().unwrap();
    assert_ne!(a, b);
    assert!(b.id() > a.id());
}

#[test]
fn release_with_stale_ticket_is_rejected() {
    let mut gate = InflightGate::new();
    let a = gate.try_acquire().unwrap();
    gate.cancel();
    let b = gate.try_acquire().unwrap();
    assert!(!gate.release(a));
    assert_eq!(gate.current(), Some(b));
}

// =============================================================
// Delivery
// =============================================================

#[test]
fn deliver_accepts_once_per_ticket() {
    let mut gate = InflightGate::new();
    let t = gate.try_acquire().unwrap();
    assert_eq!(gate.deliver(), Some(t));
    assert_eq!(gate.deliver(), None);
}

#[test]
fn deliver_without_request_is_rejected() {
    let mut gate = InflightGate::new();
    assert_eq!(gate.deliver(), None);
}

#[test]
fn deliver_after_cancel_is_stale() {
    let mut gate = InflightGate::new();
    let _t = gate.try_acquire().unwrap();
    gate.cancel();
    assert_eq!(gate.deliver(), None);
}

#[test]
fn delivery_flag_resets_for_next_ticket() {
    let mut gate = InflightGate::new();
    let a = gate.try_acquire().unwrap();
    assert_eq!(gate.deliver(), Some(a));
    gate.release(a);
    let b = gate.try_acquire().unwrap();
    assert_eq!(gate.deliver(), Some(b));
}

// =============================================================
// Close
// =============================================================

#[test]
fn closed_gate_refuses_everything() {
    let mut gate = InflightGate::new();
    let t = gate.try_acquire().unwrap();
    gate.close();
    assert!(gate.is_closed());
    assert!(!gate.is_busy());
    assert!(gate.try_acquire().is_none());
    assert_eq!(gate.deliver(), None);
    assert!(!gate.release(t));
    // Refusals after close are not counted as busy drops.
    assert_eq!(gate.dropped(), 0);
}

#[test]
fn close_twice_is_harmless() {
    let mut gate = InflightGate::new();
    gate.close();
    gate.close();
    assert!(gate.is_closed());
}
