//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `cell_style` is pure and tested natively; `pointer_release` touches the
//! DOM and only exists in browser builds.

pub mod cell_style;
#[cfg(feature = "csr")]
pub mod pointer_release;
