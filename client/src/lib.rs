//! # client
//!
//! Leptos + WASM page for the group availability grid.
//!
//! The page owns one [`grid::engine::EngineCore`] inside a reactive signal,
//! renders the weekly grid from it, and forwards pointer and button events
//! back into it. All scheduling rules live in the `grid` crate; this crate
//! only draws and wires events.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
