//! Buttons that drive the selection controller.

use leptos::prelude::*;

use grid::engine::EngineCore;
use grid::selection::ModeKind;

use crate::state::schedule::dispatch;

/// "Add Availability" while idle; "Cancel" / "Save" while drawing.
///
/// Naming has its own dialog, so the bar is empty then.
#[component]
pub fn ActionBar() -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();
    let mode = move || engine.with(EngineCore::mode_kind);

    view! {
        <div class="action-bar">
            {move || match mode() {
                ModeKind::Idle => {
                    view! {
                        <button
                            class="btn btn--primary"
                            on:click=move |_| dispatch(engine, EngineCore::add_availability)
                        >
                            "Add Availability"
                        </button>
                    }
                        .into_any()
                }
                ModeKind::Selecting => {
                    view! {
                        <span class="action-bar__hint">"Click and drag to mark when you're free"</span>
                        <button class="btn" on:click=move |_| dispatch(engine, EngineCore::cancel)>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| dispatch(engine, EngineCore::save)>
                            "Save"
                        </button>
                    }
                        .into_any()
                }
                ModeKind::Naming => ().into_any(),
            }}
        </div>
    }
}
