//! Names of everyone who has responded.

use leptos::prelude::*;

use grid::engine::EngineCore;

/// Responder names in submission order, with a running count.
#[component]
pub fn ResponseList() -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();

    let count = move || engine.with(|e| e.responses().len());
    let names = move || {
        engine.with(|e| e.responses().iter().map(|r| r.name().to_owned()).collect::<Vec<_>>())
    };

    view! {
        <section class="responses">
            <h2 class="responses__title">"Responses (" {count} ")"</h2>
            <Show
                when=move || { count() > 0 }
                fallback=|| view! { <p class="responses__empty">"No responses yet."</p> }
            >
                <ul class="responses__list">
                    {move || {
                        names()
                            .into_iter()
                            .map(|name| view! { <li class="responses__item">{name}</li> })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
