//! Schedule state: the grid engine shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page keeps exactly one `EngineCore` in an `RwSignal`. Components never
//! mutate it directly; they call [`dispatch`] with one engine operation, and
//! subscribers are only notified when the engine reports a change.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use leptos::prelude::*;

use grid::engine::{Action, EngineCore};
use grid::layout::GridLayout;

/// Grid shape embedded at build time.
pub const GRID_CONFIG: &str = include_str!("../../grid.json");

/// Parse the grid config, falling back to the default week on any error.
pub fn load_layout(text: &str) -> GridLayout {
    match GridLayout::from_json(text) {
        Ok(layout) => layout,
        Err(err) => {
            leptos::logging::warn!("invalid grid config, using the default week: {err}");
            GridLayout::default()
        }
    }
}

/// Run one engine operation and notify subscribers if it changed anything.
pub fn dispatch(engine: RwSignal<EngineCore>, op: impl FnOnce(&mut EngineCore) -> Action) {
    engine.maybe_update(|core| op(core) != Action::None);
}
