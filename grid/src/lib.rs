//! Availability grid engine for the group scheduler.
//!
//! This crate holds everything about the weekly availability grid that does
//! not need a browser: addressing cells, describing the grid's shape,
//! tracking an in-progress selection, storing named responses, and turning
//! those responses into heat-map shades. The host UI (`client`) owns one
//! [`engine::EngineCore`], forwards pointer and button events to it, and
//! renders whatever [`engine::EngineCore::cell_view`] reports.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Owned state container and the [`engine::Action`]s it emits |
//! | [`cell`] | Days and canonical cell identifiers |
//! | [`layout`] | Grid dimensions, time slots, and the JSON grid config |
//! | [`selection`] | The Idle / Selecting / Naming state machine |
//! | [`responses`] | Ordered store of named responses |
//! | [`heat`] | Coverage counting and shade buckets |
//! | [`consts`] | Shared constants (default hours, bucket count) |

pub mod cell;
pub mod consts;
pub mod engine;
pub mod heat;
pub mod layout;
pub mod responses;
pub mod selection;
