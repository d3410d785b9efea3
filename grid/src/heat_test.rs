use super::*;
use crate::cell::Day;
use crate::responses::Response;
use crate::selection::Selection;

fn a() -> CellId {
    CellId::at_hour(Day::Mon, 8)
}

fn b() -> CellId {
    CellId::at_hour(Day::Tue, 8)
}

fn store_of(responses: &[(&str, Vec<CellId>)]) -> ResponseStore {
    let mut store = ResponseStore::new();
    for (name, ids) in responses {
        let cells: Selection = ids.iter().copied().collect();
        store.push(Response::named(name, &cells).unwrap());
    }
    store
}

// =============================================================
// shade_for
// =============================================================

#[test]
fn no_responses_is_neutral() {
    assert_eq!(shade_for(0, 0), Shade::Neutral);
}

#[test]
fn zero_coverage_is_neutral() {
    for n in 1..10 {
        assert_eq!(shade_for(0, n), Shade::Neutral);
    }
}

#[test]
fn single_response_is_full() {
    assert_eq!(shade_for(1, 1), Shade::Full);
}

#[test]
fn full_overlap_is_full() {
    for n in 2..10 {
        assert_eq!(shade_for(n, n), Shade::Full);
    }
}

#[test]
fn partial_overlap_uses_ceil_quarter_buckets() {
    assert_eq!(shade_for(1, 2), Shade::Light);
    assert_eq!(shade_for(1, 3), Shade::Light);
    assert_eq!(shade_for(2, 3), Shade::Medium);
    assert_eq!(shade_for(1, 4), Shade::Faint);
    assert_eq!(shade_for(2, 4), Shade::Light);
    assert_eq!(shade_for(3, 4), Shade::Medium);
    assert_eq!(shade_for(1, 5), Shade::Faint);
    assert_eq!(shade_for(4, 5), Shade::Deep);
    assert_eq!(shade_for(7, 8), Shade::Deep);
}

#[test]
fn partial_overlap_is_always_intermediate() {
    let intermediate = [Shade::Faint, Shade::Light, Shade::Medium, Shade::Deep];
    for n in 2..=40 {
        for c in 1..n {
            assert!(intermediate.contains(&shade_for(c, n)), "c={c} n={n}");
        }
    }
}

#[test]
fn intensity_is_monotonic_in_ratio() {
    for n in 1..=40 {
        let shades: Vec<Shade> = (0..=n).map(|c| shade_for(c, n)).collect();
        assert!(shades.windows(2).all(|w| w[0] <= w[1]), "n={n}: {shades:?}");
    }
}

#[test]
fn coverage_above_total_falls_back_to_lightest() {
    assert_eq!(shade_for(9, 2), Shade::Faint);
}

#[test]
fn shade_levels_and_legend() {
    let levels: Vec<u8> = Shade::legend().iter().map(|s| s.level()).collect();
    assert_eq!(levels, [0, 1, 2, 3, 4, 5]);
}

// =============================================================
// Store-backed shading
// =============================================================

#[test]
fn empty_store_is_neutral_everywhere() {
    let store = ResponseStore::new();
    assert_eq!(shade(&store, &a()), Shade::Neutral);
    assert_eq!(Heatmap::build(&store).shade(&a()), Shade::Neutral);
}

#[test]
fn two_overlapping_responses() {
    let store = store_of(&[("R1", vec![a()]), ("R2", vec![a(), b()])]);
    assert_eq!(shade(&store, &a()), Shade::Full);
    assert_eq!(shade(&store, &b()), Shade::Light);
    assert_eq!(shade(&store, &CellId::at_hour(Day::Fri, 12)), Shade::Neutral);
}

#[test]
fn shading_is_idempotent() {
    let store = store_of(&[("R1", vec![a()]), ("R2", vec![b()]), ("R3", vec![a(), b()])]);
    let first = shade(&store, &a());
    for _ in 0..5 {
        assert_eq!(shade(&store, &a()), first);
    }
}

// =============================================================
// Heatmap
// =============================================================

#[test]
fn heatmap_matches_pure_function() {
    let store = store_of(&[("R1", vec![a()]), ("R2", vec![a(), b()]), ("R3", vec![b()]), ("R4", vec![])]);
    let map = Heatmap::build(&store);
    assert_eq!(map.total(), 4);
    for cell in [a(), b(), CellId::at_hour(Day::Sun, 23)] {
        assert_eq!(map.coverage(&cell), store.coverage(&cell));
        assert_eq!(map.shade(&cell), shade(&store, &cell));
    }
}

#[test]
fn heatmap_default_is_empty() {
    let map = Heatmap::default();
    assert_eq!(map.total(), 0);
    assert_eq!(map.coverage(&a()), 0);
}
