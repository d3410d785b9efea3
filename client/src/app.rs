//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use grid::engine::EngineCore;
use grid::selection::ModeKind;

use crate::components::action_bar::ActionBar;
use crate::components::availability_grid::AvailabilityGrid;
use crate::components::drawer::Drawer;
use crate::components::legend::Legend;
use crate::components::name_dialog::NameDialog;
use crate::components::response_list::ResponseList;
use crate::components::title_field::TitleField;
use crate::state::schedule::{GRID_CONFIG, dispatch, load_layout};
use crate::state::ui::UiState;

/// Root application component.
///
/// Provides the schedule engine and UI chrome state to every child.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let engine = RwSignal::new(EngineCore::new(load_layout(GRID_CONFIG)));
    let ui = RwSignal::new(UiState::default());

    provide_context(engine);
    provide_context(ui);

    let naming = move || engine.with(|e| e.mode_kind() == ModeKind::Naming);
    let name = Signal::derive(move || engine.with(|e| e.mode().name().unwrap_or_default().to_owned()));
    let can_save = Signal::derive(move || engine.with(EngineCore::can_save));

    view! {
        <Title text="Availability"/>

        <main class="page">
            <header class="page__header">
                <Drawer/>
                <TitleField/>
            </header>

            <div class="page__body">
                <AvailabilityGrid/>
                <aside class="page__side">
                    <ActionBar/>
                    <Legend/>
                    <ResponseList/>
                </aside>
            </div>

            <Show when=naming>
                <NameDialog
                    value=name
                    can_save=can_save
                    on_input=Callback::new(move |text: String| dispatch(engine, |e| e.set_name(&text)))
                    on_cancel=Callback::new(move |()| dispatch(engine, EngineCore::cancel))
                    on_save=Callback::new(move |()| dispatch(engine, EngineCore::save))
                />
            </Show>
        </main>
    }
}
