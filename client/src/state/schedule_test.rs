use super::*;
use grid::cell::{CellId, Day};
use grid::layout::Granularity;
use grid::selection::ModeKind;

// =============================================================
// load_layout
// =============================================================

#[test]
fn embedded_config_is_valid() {
    assert!(GridLayout::from_json(GRID_CONFIG).is_ok());
}

#[test]
fn embedded_config_is_full_week_with_half_hours() {
    let layout = load_layout(GRID_CONFIG);
    assert_eq!(layout.days, Day::ALL.to_vec());
    assert_eq!(layout.granularity, Granularity::HalfHour);
    assert_eq!(layout.time_slots().first().map(|s| s.label.as_str()), Some("8:00"));
}

#[test]
fn bad_config_falls_back_to_default() {
    assert_eq!(load_layout("not json"), GridLayout::default());
    assert_eq!(load_layout(r#"{ "start_hour": 20, "end_hour": 8 }"#), GridLayout::default());
}

#[test]
fn partial_config_keeps_defaults() {
    let layout = load_layout(r#"{ "granularity": "hour" }"#);
    assert_eq!(layout.granularity, Granularity::Hour);
    assert_eq!(layout.start_hour, 8);
}

// =============================================================
// dispatch
// =============================================================

#[test]
fn dispatch_applies_operation() {
    let engine = RwSignal::new(EngineCore::default());
    dispatch(engine, EngineCore::add_availability);
    dispatch(engine, |e| e.pointer_down(CellId::at_hour(Day::Mon, 9)));
    engine.with_untracked(|e| {
        assert_eq!(e.mode_kind(), ModeKind::Selecting);
        assert_eq!(e.mode().selected().map(|s| s.len()), Some(1));
    });
}

#[test]
fn dispatch_of_ignored_event_leaves_state() {
    let engine = RwSignal::new(EngineCore::default());
    dispatch(engine, EngineCore::save);
    assert_eq!(engine.with_untracked(EngineCore::mode_kind), ModeKind::Idle);
}

#[test]
fn dispatch_of_release_ends_drag() {
    let engine = RwSignal::new(EngineCore::default());
    dispatch(engine, EngineCore::add_availability);
    dispatch(engine, |e| e.pointer_down(CellId::at_hour(Day::Mon, 9)));
    assert!(engine.with_untracked(|e| e.mode().is_dragging()));
    dispatch(engine, EngineCore::pointer_up);
    engine.with_untracked(|e| {
        assert!(!e.mode().is_dragging());
        assert_eq!(e.mode_kind(), ModeKind::Selecting);
    });
}
