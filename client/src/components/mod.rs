//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and the availability grid, reading the
//! schedule engine and UI state from Leptos context providers.

pub mod action_bar;
pub mod availability_grid;
pub mod drawer;
pub mod legend;
pub mod name_dialog;
pub mod response_list;
pub mod title_field;
