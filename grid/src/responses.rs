//! Named availability responses and the in-memory store that holds them.
//!
//! A response is created only by the naming step and never changes after
//! that. The store keeps responses in submission order, which is also the
//! order they are listed on the page.

#[cfg(test)]
#[path = "responses_test.rs"]
mod responses_test;

use serde::Serialize;

use crate::cell::CellId;
use crate::selection::Selection;

/// One person's finalized availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    name: String,
    cells: Selection,
}

impl Response {
    /// Build a response from a raw name field.
    ///
    /// The name is trimmed; `None` if nothing is left.
    #[must_use]
    pub fn named(name: &str, cells: &Selection) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self { name: name.to_owned(), cells: cells.clone() })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cells(&self) -> &Selection {
        &self.cells
    }

    /// Whether this response marked `cell` as available.
    #[must_use]
    pub fn covers(&self, cell: &CellId) -> bool {
        self.cells.contains(cell)
    }
}

/// Ordered list of responses for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseStore {
    responses: Vec<Response>,
}

impl ResponseStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a response; returns its index in submission order.
    pub fn push(&mut self, response: Response) -> usize {
        self.responses.push(response);
        self.responses.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Response> {
        self.responses.get(index)
    }

    /// Responses in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.responses.iter()
    }

    /// Number of responses covering `cell`.
    #[must_use]
    pub fn coverage(&self, cell: &CellId) -> usize {
        self.responses.iter().filter(|r| r.covers(cell)).count()
    }

    /// Names of the responses covering `cell`, in submission order.
    #[must_use]
    pub fn responders(&self, cell: &CellId) -> Vec<&str> {
        self.responses
            .iter()
            .filter(|r| r.covers(cell))
            .map(Response::name)
            .collect()
    }
}
