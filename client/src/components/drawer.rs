//! Drawer menu with the event actions.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Menu toggle plus the slide-out drawer it controls.
#[component]
pub fn Drawer() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let open = move || ui.get().drawer_open;
    let toggle = move |_: leptos::ev::MouseEvent| ui.update(UiState::toggle_drawer);
    let close = move |_: leptos::ev::MouseEvent| ui.update(UiState::close_drawer);

    let edit_event = move |_: leptos::ev::MouseEvent| {
        leptos::logging::log!("Edit Event is not available yet");
        ui.update(UiState::close_drawer);
    };

    view! {
        <button class="drawer-toggle" title="Menu" on:click=toggle>
            "\u{2630}"
        </button>

        <Show when=open>
            <div class="drawer-backdrop" on:click=close></div>
            <nav class="drawer">
                <button class="drawer__item" on:click=edit_event>
                    "Edit Event"
                </button>
            </nav>
        </Show>
    }
}
