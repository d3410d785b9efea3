//! Freeform event title at the top of the page.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Title input. Enter drops focus; nothing is submitted anywhere.
#[component]
pub fn TitleField() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        if let Some(input) = input_ref.get() {
            if let Err(err) = input.blur() {
                leptos::logging::warn!("title field blur failed: {err:?}");
            }
        }
    };

    view! {
        <input
            node_ref=input_ref
            type="text"
            class="title-field"
            placeholder="Enter title..."
            prop:value=move || ui.get().event_title
            on:input=move |ev| ui.update(|u| u.set_title(event_target_value(&ev)))
            on:keydown=on_keydown
        />
    }
}
