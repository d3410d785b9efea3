use super::*;
use crate::cell::Day;

fn cells(ids: &[CellId]) -> Selection {
    ids.iter().copied().collect()
}

fn a() -> CellId {
    CellId::at_hour(Day::Mon, 8)
}

fn b() -> CellId {
    CellId::at_hour(Day::Mon, 9)
}

// =============================================================
// Response
// =============================================================

#[test]
fn named_trims_whitespace() {
    let r = Response::named("  Alice  ", &cells(&[a()])).unwrap();
    assert_eq!(r.name(), "Alice");
    assert_eq!(r.cells(), &cells(&[a()]));
}

#[test]
fn named_rejects_empty_and_blank() {
    assert!(Response::named("", &cells(&[a()])).is_none());
    assert!(Response::named("   \t\n", &cells(&[a()])).is_none());
}

#[test]
fn named_allows_empty_selection() {
    let r = Response::named("Bob", &Selection::new()).unwrap();
    assert!(r.cells().is_empty());
}

#[test]
fn covers_checks_membership() {
    let r = Response::named("Alice", &cells(&[a()])).unwrap();
    assert!(r.covers(&a()));
    assert!(!r.covers(&b()));
}

#[test]
fn response_serializes_cell_ids() {
    let r = Response::named("Alice", &cells(&[a()])).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["cells"][0]["day"], "Mon");
    assert_eq!(json["cells"][0]["minute"], 480);
}

// =============================================================
// ResponseStore
// =============================================================

#[test]
fn store_starts_empty() {
    let store = ResponseStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.coverage(&a()), 0);
    assert!(store.responders(&a()).is_empty());
}

#[test]
fn push_keeps_submission_order() {
    let mut store = ResponseStore::new();
    assert_eq!(store.push(Response::named("Zed", &cells(&[a()])).unwrap()), 0);
    assert_eq!(store.push(Response::named("Amy", &cells(&[b()])).unwrap()), 1);
    let names: Vec<&str> = store.iter().map(Response::name).collect();
    assert_eq!(names, ["Zed", "Amy"]);
    assert_eq!(store.get(1).map(Response::name), Some("Amy"));
    assert!(store.get(2).is_none());
}

#[test]
fn coverage_and_responders() {
    let mut store = ResponseStore::new();
    store.push(Response::named("R1", &cells(&[a()])).unwrap());
    store.push(Response::named("R2", &cells(&[a(), b()])).unwrap());
    assert_eq!(store.coverage(&a()), 2);
    assert_eq!(store.coverage(&b()), 1);
    assert_eq!(store.responders(&a()), ["R1", "R2"]);
    assert_eq!(store.responders(&b()), ["R2"]);
    assert_eq!(store.coverage(&CellId::at_hour(Day::Sun, 20)), 0);
}
