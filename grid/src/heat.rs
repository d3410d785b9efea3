//! Heat-map aggregation: how strongly to shade a cell given the responses.
//!
//! Shading depends only on two numbers: `n`, the number of responses, and
//! `c`, how many of them cover the cell. No responses or no coverage means
//! neutral, full overlap (including a single response) means the strongest
//! shade, and everything in between lands in one of four intermediate
//! buckets by `ceil(c / n * 4)`.

#[cfg(test)]
#[path = "heat_test.rs"]
mod heat_test;

use std::collections::HashMap;

use crate::cell::CellId;
use crate::consts::SHADE_BUCKETS;
use crate::responses::ResponseStore;

/// Visual intensity of a cell outside selection mode, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shade {
    /// Nobody is available (or there are no responses yet).
    Neutral,
    /// Intermediate bucket 1.
    Faint,
    /// Intermediate bucket 2.
    Light,
    /// Intermediate bucket 3.
    Medium,
    /// Intermediate bucket 4.
    Deep,
    /// Everybody is available.
    Full,
}

impl Shade {
    /// Every shade, weakest first, for the legend strip.
    pub const ALL: [Shade; 6] = [Shade::Neutral, Shade::Faint, Shade::Light, Shade::Medium, Shade::Deep, Shade::Full];

    /// Intensity level, `0` (neutral) through `5` (full).
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Self::Neutral => 0,
            Self::Faint => 1,
            Self::Light => 2,
            Self::Medium => 3,
            Self::Deep => 4,
            Self::Full => 5,
        }
    }

    /// Shade scale shown beside the grid.
    #[must_use]
    pub fn legend() -> &'static [Shade] {
        &Self::ALL
    }

    fn from_bucket(bucket: usize) -> Self {
        match bucket {
            1 => Self::Faint,
            2 => Self::Light,
            3 => Self::Medium,
            4 => Self::Deep,
            // Unreachable for 0 < c < n; kept as the lightest shade.
            _ => Self::Faint,
        }
    }
}

/// Shade for a cell covered by `coverage` of `total` responses.
#[must_use]
pub fn shade_for(coverage: usize, total: usize) -> Shade {
    if total == 0 || coverage == 0 {
        return Shade::Neutral;
    }
    if total == 1 || coverage == total {
        return Shade::Full;
    }
    Shade::from_bucket((coverage * SHADE_BUCKETS).div_ceil(total))
}

/// Shade of `cell` given every stored response.
#[must_use]
pub fn shade(store: &ResponseStore, cell: &CellId) -> Shade {
    shade_for(store.coverage(cell), store.len())
}

/// Coverage of every cell, computed once per store change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Heatmap {
    coverage: HashMap<CellId, usize>,
    total: usize,
}

impl Heatmap {
    /// Count coverage for every cell any response mentions.
    #[must_use]
    pub fn build(store: &ResponseStore) -> Self {
        let mut coverage: HashMap<CellId, usize> = HashMap::new();
        for cell in store.iter().flat_map(|r| r.cells().iter()) {
            *coverage.entry(*cell).or_default() += 1;
        }
        Self { coverage, total: store.len() }
    }

    /// Number of responses the map was built from.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn coverage(&self, cell: &CellId) -> usize {
        self.coverage.get(cell).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn shade(&self, cell: &CellId) -> Shade {
        shade_for(self.coverage(cell), self.total)
    }
}
