//! Shared constants for the grid crate.

// ── Layout ──────────────────────────────────────────────────────

/// First hour row of the default grid (8:00).
pub const DEFAULT_START_HOUR: u8 = 8;

/// Hour at which the default grid ends (exclusive). Sixteen rows from 8:00.
pub const DEFAULT_END_HOUR: u8 = 24;

/// Minutes in one hour row.
pub const MINUTES_PER_HOUR: u16 = 60;

/// Offset of the half-hour slot within an hour row.
pub const HALF_HOUR_MINUTES: u16 = 30;

// ── Heat map ────────────────────────────────────────────────────

/// Number of intermediate shades between "nobody" and "everybody".
pub const SHADE_BUCKETS: usize = 4;
