//! Shade scale shown beside the grid.

use leptos::prelude::*;

use grid::engine::EngineCore;
use grid::heat::Shade;

use crate::util::cell_style::{legend_label, shade_class};

#[component]
pub fn Legend() -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();
    let total = move || engine.with(|e| e.heatmap().total());

    let swatches = Shade::legend()
        .iter()
        .map(|shade| {
            let shade = *shade;
            view! {
                <div class="legend__step">
                    <span class=format!("legend__swatch {}", shade_class(shade))></span>
                    <span class="legend__label">{move || legend_label(shade, total())}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="legend">
            <h2 class="legend__title">"Availability"</h2>
            <div class="legend__scale">{swatches}</div>
        </section>
    }
}
