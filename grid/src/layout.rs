//! Grid dimensions: which days are shown and which time slots each day has.
//!
//! The layout is fixed for a session. It is loaded once from the JSON grid
//! config (every field optional) and validated before use.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cell::{CellId, Day, time_label};
use crate::consts::{DEFAULT_END_HOUR, DEFAULT_START_HOUR, HALF_HOUR_MINUTES, MINUTES_PER_HOUR};

/// Row granularity of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// One row per hour.
    Hour,
    /// An hour row followed by a thinner half-hour row.
    #[default]
    HalfHour,
}

/// One row of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// Slot start in minutes since midnight.
    pub minute: u16,
    /// Display label, e.g. `"8:00"`.
    pub label: String,
    /// Whether this is the `:30` row of a half-hour grid.
    pub half: bool,
}

/// Errors produced while loading or validating a layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("grid has no hours: start {start} is not before end {end}")]
    EmptyHours { start: u8, end: u8 },
    #[error("hour {0} is outside 0..=24")]
    HourOutOfRange(u8),
    #[error("grid has no days")]
    NoDays,
    #[error("day {0} appears more than once")]
    DuplicateDay(Day),
    #[error("invalid grid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Shape of the availability grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Day columns, left to right.
    pub days: Vec<Day>,
    /// First hour row.
    pub start_hour: u8,
    /// Hour the grid stops at (exclusive).
    pub end_hour: u8,
    /// Whether half-hour rows are shown.
    pub granularity: Granularity,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            days: Day::ALL.to_vec(),
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            granularity: Granularity::default(),
        }
    }
}

impl GridLayout {
    /// Parse and validate a layout from its JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Parse`] for malformed JSON, or any validation
    /// error from [`GridLayout::validate`].
    pub fn from_json(text: &str) -> Result<Self, LayoutError> {
        let layout: Self = serde_json::from_str(text)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Check that the layout describes a non-empty grid.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.end_hour > 24 {
            return Err(LayoutError::HourOutOfRange(self.end_hour));
        }
        if self.start_hour >= self.end_hour {
            return Err(LayoutError::EmptyHours { start: self.start_hour, end: self.end_hour });
        }
        if self.days.is_empty() {
            return Err(LayoutError::NoDays);
        }
        let mut seen = HashSet::with_capacity(self.days.len());
        if let Some(day) = self.days.iter().find(|day| !seen.insert(**day)) {
            return Err(LayoutError::DuplicateDay(*day));
        }
        Ok(())
    }

    /// Rows of the grid, top to bottom.
    #[must_use]
    pub fn time_slots(&self) -> Vec<TimeSlot> {
        let mut slots = Vec::new();
        for hour in self.start_hour..self.end_hour {
            let minute = u16::from(hour) * MINUTES_PER_HOUR;
            slots.push(TimeSlot { minute, label: time_label(minute), half: false });
            if self.granularity == Granularity::HalfHour {
                let minute = minute + HALF_HOUR_MINUTES;
                slots.push(TimeSlot { minute, label: time_label(minute), half: true });
            }
        }
        slots
    }

    /// Every cell in render order: rows outer, days inner.
    #[must_use]
    pub fn cells(&self) -> Vec<CellId> {
        self.time_slots()
            .iter()
            .flat_map(|slot| self.days.iter().map(move |day| CellId::new(*day, slot.minute)))
            .collect()
    }

    /// Whether `cell` is one of this layout's cells.
    #[must_use]
    pub fn contains(&self, cell: &CellId) -> bool {
        if !self.days.contains(&cell.day) {
            return false;
        }
        let start = u16::from(self.start_hour) * MINUTES_PER_HOUR;
        let end = u16::from(self.end_hour) * MINUTES_PER_HOUR;
        if cell.minute < start || cell.minute >= end {
            return false;
        }
        match self.granularity {
            Granularity::Hour => cell.minute % MINUTES_PER_HOUR == 0,
            Granularity::HalfHour => cell.minute % HALF_HOUR_MINUTES == 0,
        }
    }
}
