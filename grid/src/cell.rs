//! Days of the week and the canonical cell identifier.
//!
//! A cell is one (day, time-slot) intersection of the grid. Every cell is
//! addressed by a [`CellId`] carrying the day and the slot's start time in
//! minutes since midnight. Whole-hour and half-hour grids share this single
//! scheme, so an identifier never depends on the grid's granularity.
//!
//! The textual form is `"{day}-{H}:{MM}"` (`"Mon-8:00"`, `"Sat-13:30"`) and
//! round-trips through [`std::fmt::Display`] and [`std::str::FromStr`].

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MINUTES_PER_HOUR;

/// A day column of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All seven days in week order.
    pub const ALL: [Day; 7] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat, Day::Sun];

    /// Short header label, also used inside cell identifiers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = CellIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.label() == s)
            .ok_or_else(|| CellIdError::UnknownDay(s.to_owned()))
    }
}

/// Errors produced when parsing a [`CellId`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellIdError {
    #[error("cell id has no '-' between day and time")]
    MissingSeparator,
    #[error("unknown day label: {0}")]
    UnknownDay(String),
    #[error("invalid slot time: {0}")]
    InvalidTime(String),
}

/// Identifies one (day, time-slot) cell.
///
/// Ordering is by day, then by time, which keeps selections and responses in
/// a stable reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellId {
    /// Day column.
    pub day: Day,
    /// Slot start in minutes since midnight.
    pub minute: u16,
}

impl CellId {
    #[must_use]
    pub fn new(day: Day, minute: u16) -> Self {
        Self { day, minute }
    }

    /// Cell starting on the hour.
    #[must_use]
    pub fn at_hour(day: Day, hour: u8) -> Self {
        Self::new(day, u16::from(hour) * MINUTES_PER_HOUR)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, time_label(self.minute))
    }
}

impl FromStr for CellId {
    type Err = CellIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, time) = s.split_once('-').ok_or(CellIdError::MissingSeparator)?;
        let day = day.parse::<Day>()?;
        let minute = parse_time_label(time)?;
        Ok(Self { day, minute })
    }
}

/// Format minutes since midnight as `H:MM` (`480` → `"8:00"`).
#[must_use]
pub fn time_label(minute: u16) -> String {
    format!("{}:{:02}", minute / MINUTES_PER_HOUR, minute % MINUTES_PER_HOUR)
}

fn parse_time_label(text: &str) -> Result<u16, CellIdError> {
    let invalid = || CellIdError::InvalidTime(text.to_owned());
    let (hours, minutes) = text.split_once(':').ok_or_else(invalid)?;
    if minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: u16 = hours.parse().map_err(|_| invalid())?;
    let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
    if hours >= 24 || minutes >= MINUTES_PER_HOUR {
        return Err(invalid());
    }
    Ok(hours * MINUTES_PER_HOUR + minutes)
}
