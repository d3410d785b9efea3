//! Weekly availability grid.
//!
//! ARCHITECTURE
//! ============
//! Cells are plain `<div>`s laid out with CSS grid. Each cell forwards its
//! pointer events to the engine through `dispatch`; the engine decides
//! whether the event means anything in the current mode. Drag release is
//! page-wide, so while a selection is being drawn a document listener is held
//! in a `PointerReleaseGuard` and dropped as soon as the mode moves on.

use leptos::prelude::*;

use grid::cell::{CellId, Day};
use grid::engine::{CellView, EngineCore};
use grid::layout::TimeSlot;

use crate::state::schedule::dispatch;
use crate::util::cell_style::{cell_class, cell_title};
#[cfg(feature = "csr")]
use crate::util::pointer_release::PointerReleaseGuard;

/// Day headers, hour labels, one cell per (time slot, day), and a trailing
/// placeholder row.
#[component]
pub fn AvailabilityGrid() -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();

    // Layout is fixed for the page's lifetime.
    let layout = engine.with_untracked(|e| e.layout().clone());
    let days = layout.days.clone();
    let slots = layout.time_slots();
    let columns = format!("grid-template-columns: 4rem repeat({}, minmax(3rem, 1fr));", days.len());

    #[cfg(feature = "csr")]
    {
        let release = StoredValue::new_local(None::<PointerReleaseGuard>);
        Effect::new(move || {
            let wants = engine.with(EngineCore::wants_pointer_release);
            release.update_value(|slot| {
                if !wants {
                    *slot = None;
                } else if slot.is_none() {
                    *slot = PointerReleaseGuard::attach(move || dispatch(engine, EngineCore::pointer_up));
                }
            });
        });
        on_cleanup(move || {
            release.try_update_value(|slot| *slot = None);
        });
    }

    let headers = days
        .iter()
        .map(|day| view! { <div class="schedule__day">{day.label()}</div> })
        .collect_view();

    let rows = slots
        .into_iter()
        .map(|slot| view! { <GridRow row=slot days=days.clone()/> })
        .collect_view();

    // Closing row below the last slot; never interactive.
    let placeholder = days
        .iter()
        .map(|_| view! { <div class="cell cell--placeholder"></div> })
        .collect_view();

    view! {
        <section class="schedule" style=columns>
            <div class="schedule__corner"></div>
            {headers}
            {rows}
            <div class="schedule__time"></div>
            {placeholder}
        </section>
    }
}

/// One time slot: its label followed by a cell for each day.
#[component]
fn GridRow(row: TimeSlot, days: Vec<Day>) -> impl IntoView {
    // Only full hours are labelled; half-hour rows stay blank.
    let label = if row.half { String::new() } else { row.label.clone() };
    let cells = days
        .into_iter()
        .map(|day| view! { <GridCell id=CellId::new(day, row.minute) half=row.half/> })
        .collect_view();

    view! {
        <div class="schedule__time">{label}</div>
        {cells}
    }
}

#[component]
fn GridCell(id: CellId, half: bool) -> impl IntoView {
    let engine = expect_context::<RwSignal<EngineCore>>();

    let cell_view = Memo::new(move |_| engine.with(|e| e.cell_view(&id)));
    let class = move || cell_class(cell_view.get(), half);
    let title = move || match cell_view.get() {
        CellView::Selection { .. } => None,
        heat @ CellView::Heat { .. } => engine.with(|e| cell_title(heat, &e.responders(&id))),
    };

    let on_pointerdown = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        dispatch(engine, |e| e.pointer_down(id));
    };
    let on_pointerenter = move |_: leptos::ev::PointerEvent| dispatch(engine, |e| e.pointer_enter(id));

    view! {
        <div
            class=class
            title=title
            data-cell=id.to_string()
            on:pointerdown=on_pointerdown
            on:pointerenter=on_pointerenter
        ></div>
    }
}
