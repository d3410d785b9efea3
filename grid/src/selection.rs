//! Selection state machine: Idle, Selecting, Naming.
//!
//! The controller is a single tagged [`Mode`], so a selection is either being
//! drawn, being named, or absent. Each variant carries exactly the context it
//! needs: the cells picked so far, whether the pointer is held, and the name
//! typed into the dialog.
//!
//! Transitions:
//!
//! ```text
//! Idle ──begin──▶ Selecting ──advance──▶ Naming ──advance (name ok)──▶ Idle
//!                     │                     │
//!                     └──cancel──▶ Idle ◀──cancel
//! ```
//!
//! Any other event in a given mode is ignored and reported as "no change".
//! A drawn selection only ever grows; there is no gesture that removes one
//! cell, only `cancel`, which drops the whole set.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeSet;

use crate::cell::CellId;
use crate::responses::Response;

/// Cells picked during one draw, in reading order.
pub type Selection = BTreeSet<CellId>;

/// Tag of the current [`Mode`], for hosts that only need to branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeKind {
    #[default]
    Idle,
    Selecting,
    Naming,
}

/// The controller state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// No selection in progress; the grid shows the heat map.
    #[default]
    Idle,
    /// The user is drawing a new availability region.
    Selecting {
        /// Cells added so far.
        cells: Selection,
        /// The pointer went down on a cell and has not been released yet.
        dragging: bool,
    },
    /// The drawn region is waiting for a display name.
    Naming {
        /// Cells carried over from `Selecting`.
        cells: Selection,
        /// Raw text of the name field.
        name: String,
    },
}

/// Outcome of [`Mode::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Not valid in the current mode.
    Ignored,
    /// Selecting moved on to Naming.
    Naming,
    /// Naming stayed put because the trimmed name is empty.
    Rejected,
    /// Naming finished with a response ready to store.
    Submitted(Response),
}

impl Mode {
    #[must_use]
    pub fn kind(&self) -> ModeKind {
        match self {
            Self::Idle => ModeKind::Idle,
            Self::Selecting { .. } => ModeKind::Selecting,
            Self::Naming { .. } => ModeKind::Naming,
        }
    }

    /// The in-progress selection, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Selection> {
        match self {
            Self::Idle => None,
            Self::Selecting { cells, .. } | Self::Naming { cells, .. } => Some(cells),
        }
    }

    /// Whether the pointer is held during a draw.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Selecting { dragging: true, .. })
    }

    /// Name field contents while naming.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Naming { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Whether `advance` from Naming would submit.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::Naming { name, .. } if !name.trim().is_empty())
    }

    /// Idle → Selecting with an empty set.
    pub fn begin(&mut self) -> bool {
        if !matches!(self, Self::Idle) {
            return false;
        }
        *self = Self::Selecting { cells: Selection::new(), dragging: false };
        true
    }

    /// Pointer-down on a cell: add it and start dragging.
    ///
    /// Reports a change only if the cell is new or the drag just started.
    pub fn press(&mut self, cell: CellId) -> bool {
        let Self::Selecting { cells, dragging } = self else {
            return false;
        };
        let started = !std::mem::replace(dragging, true);
        cells.insert(cell) || started
    }

    /// Pointer-enter on a cell: add it if the pointer is held.
    pub fn enter(&mut self, cell: CellId) -> bool {
        match self {
            Self::Selecting { cells, dragging: true } => cells.insert(cell),
            _ => false,
        }
    }

    /// Pointer-up anywhere: stop dragging, keep selecting.
    pub fn release(&mut self) -> bool {
        match self {
            Self::Selecting { dragging, .. } if *dragging => {
                *dragging = false;
                true
            }
            _ => false,
        }
    }

    /// Drop the pending selection (and name) and return to Idle.
    pub fn cancel(&mut self) -> bool {
        if matches!(self, Self::Idle) {
            return false;
        }
        *self = Self::Idle;
        true
    }

    /// Replace the name field while naming.
    pub fn set_name(&mut self, text: &str) -> bool {
        let Self::Naming { name, .. } = self else {
            return false;
        };
        if name == text {
            return false;
        }
        text.clone_into(name);
        true
    }

    /// The "Save" button: Selecting → Naming, or Naming → Idle with a response.
    pub fn advance(&mut self) -> Advance {
        match std::mem::take(self) {
            Self::Idle => Advance::Ignored,
            Self::Selecting { cells, .. } => {
                *self = Self::Naming { cells, name: String::new() };
                Advance::Naming
            }
            Self::Naming { cells, name } => match Response::named(&name, &cells) {
                Some(response) => Advance::Submitted(response),
                None => {
                    *self = Self::Naming { cells, name };
                    Advance::Rejected
                }
            },
        }
    }
}
