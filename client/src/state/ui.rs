//! Local UI chrome state (event title, drawer menu).
//!
//! DESIGN
//! ======
//! Keeps presentation-only concerns out of the grid engine so the title field
//! and drawer can change without touching scheduling rules.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the page header and drawer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Freeform event title typed into the header field.
    pub event_title: String,
    /// Whether the drawer menu is open.
    pub drawer_open: bool,
}

impl UiState {
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    /// Store the title as typed; no validation.
    pub fn set_title(&mut self, title: String) {
        self.event_title = title;
    }
}
