//! Scoped page-wide `pointerup` subscription.
//!
//! A drag can end anywhere on the page, not just over the grid, so while a
//! selection is being drawn the grid listens on the document. The listener
//! lives exactly as long as its [`PointerReleaseGuard`]; dropping the guard
//! removes it.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

const EVENT: &str = "pointerup";

/// Owns one document `pointerup` listener.
pub struct PointerReleaseGuard {
    document: web_sys::Document,
    callback: Closure<dyn FnMut()>,
}

impl PointerReleaseGuard {
    /// Register `on_release` for every page-wide pointer release.
    ///
    /// Returns `None` outside a browser document or if registration fails.
    pub fn attach(on_release: impl FnMut() + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let callback = Closure::<dyn FnMut()>::new(on_release);
        if let Err(err) = document.add_event_listener_with_callback(EVENT, callback.as_ref().unchecked_ref()) {
            log::warn!("pointerup listener not attached: {err:?}");
            return None;
        }
        log::debug!("pointerup listener attached");
        Some(Self { document, callback })
    }
}

impl Drop for PointerReleaseGuard {
    fn drop(&mut self) {
        let removed = self
            .document
            .remove_event_listener_with_callback(EVENT, self.callback.as_ref().unchecked_ref());
        match removed {
            Ok(()) => log::debug!("pointerup listener removed"),
            Err(err) => log::warn!("pointerup listener not removed: {err:?}"),
        }
    }
}
