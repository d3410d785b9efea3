use log::{debug, warn};

use crate::cell::CellId;
use crate::heat::{Heatmap, Shade};
use crate::layout::GridLayout;
use crate::responses::{Response, ResponseStore};
use crate::selection::{Advance, Mode, ModeKind};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The event was ignored in the current mode.
    None,
    /// The controller moved to a different mode.
    ModeChanged(ModeKind),
    /// The in-progress selection grew.
    SelectionChanged,
    /// The pointer was released and the drag is over; still selecting.
    DragEnded,
    /// The name field changed.
    NameChanged,
    /// A response was stored at `index` and the controller is back to idle.
    ResponseAdded { index: usize },
}

/// How the host should draw one cell.
///
/// Selection styling and heat styling are mutually exclusive: any mode other
/// than idle draws every cell as part of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Selecting or naming: highlighted if picked, otherwise neutral.
    Selection { selected: bool },
    /// Idle: shaded by how many responses cover the cell.
    Heat { shade: Shade, coverage: usize, total: usize },
}

/// Core engine state: the grid shape, the selection controller, and the
/// stored responses.
///
/// The host owns exactly one of these and routes every input through it.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    layout: GridLayout,
    mode: Mode,
    responses: ResponseStore,
    heatmap: Heatmap,
}

impl EngineCore {
    #[must_use]
    pub fn new(layout: GridLayout) -> Self {
        Self { layout, ..Self::default() }
    }

    // --- Buttons ---

    /// "Add Availability": start a fresh selection.
    pub fn add_availability(&mut self) -> Action {
        if self.mode.begin() {
            debug!("selection started");
            Action::ModeChanged(ModeKind::Selecting)
        } else {
            Action::None
        }
    }

    /// "Cancel": drop the pending selection from Selecting or Naming.
    pub fn cancel(&mut self) -> Action {
        if self.mode.cancel() {
            debug!("selection cancelled");
            Action::ModeChanged(ModeKind::Idle)
        } else {
            Action::None
        }
    }

    /// "Save": Selecting moves to Naming; Naming stores the response when
    /// the trimmed name is non-empty.
    pub fn save(&mut self) -> Action {
        match self.mode.advance() {
            Advance::Ignored => Action::None,
            Advance::Naming => {
                debug!("naming {} selected cells", self.selection_len());
                Action::ModeChanged(ModeKind::Naming)
            }
            Advance::Rejected => {
                warn!("save ignored: name is empty");
                Action::None
            }
            Advance::Submitted(response) => self.store(response),
        }
    }

    /// Update the name field while naming.
    pub fn set_name(&mut self, text: &str) -> Action {
        if self.mode.set_name(text) { Action::NameChanged } else { Action::None }
    }

    // --- Pointer ---

    /// Pointer pressed on `cell`.
    pub fn pointer_down(&mut self, cell: CellId) -> Action {
        if !self.accepts(&cell) {
            return Action::None;
        }
        if self.mode.press(cell) { Action::SelectionChanged } else { Action::None }
    }

    /// Pointer moved onto `cell`.
    pub fn pointer_enter(&mut self, cell: CellId) -> Action {
        if !self.accepts(&cell) {
            return Action::None;
        }
        if self.mode.enter(cell) { Action::SelectionChanged } else { Action::None }
    }

    /// Pointer released anywhere on the page.
    pub fn pointer_up(&mut self) -> Action {
        if self.mode.release() { Action::DragEnded } else { Action::None }
    }

    // --- Queries ---

    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    #[must_use]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    #[must_use]
    pub fn mode_kind(&self) -> ModeKind {
        self.mode.kind()
    }

    #[must_use]
    pub fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    #[must_use]
    pub fn heatmap(&self) -> &Heatmap {
        &self.heatmap
    }

    /// Whether the Save button should be enabled.
    #[must_use]
    pub fn can_save(&self) -> bool {
        match self.mode.kind() {
            ModeKind::Idle => false,
            ModeKind::Selecting => true,
            ModeKind::Naming => self.mode.can_submit(),
        }
    }

    /// Whether the host must listen for a page-wide pointer release.
    #[must_use]
    pub fn wants_pointer_release(&self) -> bool {
        self.mode.kind() == ModeKind::Selecting
    }

    /// How to draw `cell` right now.
    #[must_use]
    pub fn cell_view(&self, cell: &CellId) -> CellView {
        match self.mode.selected() {
            Some(cells) => CellView::Selection { selected: cells.contains(cell) },
            None => CellView::Heat {
                shade: self.heatmap.shade(cell),
                coverage: self.heatmap.coverage(cell),
                total: self.heatmap.total(),
            },
        }
    }

    /// Names of the responses covering `cell`, in submission order.
    #[must_use]
    pub fn responders(&self, cell: &CellId) -> Vec<&str> {
        self.responses.responders(cell)
    }

    fn selection_len(&self) -> usize {
        self.mode.selected().map_or(0, std::collections::BTreeSet::len)
    }

    fn accepts(&self, cell: &CellId) -> bool {
        let inside = self.layout.contains(cell);
        if !inside {
            warn!("ignoring pointer event outside the grid: {cell}");
        }
        inside
    }

    fn store(&mut self, response: Response) -> Action {
        debug!("storing response from {} ({} cells)", response.name(), response.cells().len());
        let index = self.responses.push(response);
        self.heatmap = Heatmap::build(&self.responses);
        Action::ResponseAdded { index }
    }
}
