//! Modal dialog that asks for the responder's name.

use leptos::prelude::*;

/// Name prompt shown after the selection is saved.
///
/// Enter saves, Escape cancels, and clicking the backdrop cancels.
#[component]
pub fn NameDialog(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] can_save: Signal<bool>,
    on_input: Callback<String>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            on_save.run(());
        }
        "Escape" => {
            ev.prevent_default();
            on_cancel.run(());
        }
        _ => {}
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--name" on:click=move |ev| ev.stop_propagation()>
                <label class="dialog__label">
                    "Your name"
                    <input
                        type="text"
                        class="dialog__input"
                        prop:value=move || value.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                        on:keydown=on_keydown
                        autofocus=true
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !can_save.get()
                        on:click=move |_| on_save.run(())
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
