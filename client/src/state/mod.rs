//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `schedule` wraps the grid engine that owns every scheduling rule; `ui`
//! holds page chrome that the engine does not care about.

pub mod schedule;
pub mod ui;
