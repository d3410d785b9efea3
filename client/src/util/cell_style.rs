//! CSS classes and tooltips for grid cells.

#[cfg(test)]
#[path = "cell_style_test.rs"]
mod cell_style_test;

use grid::engine::CellView;
use grid::heat::Shade;

/// Class list for one grid cell.
///
/// Half-hour rows add `cell--half` for the thinner, top-bordered style.
pub fn cell_class(view: CellView, half: bool) -> String {
    let state = match view {
        CellView::Selection { selected: true } => "cell--selected".to_owned(),
        CellView::Selection { selected: false } => "cell--selectable".to_owned(),
        CellView::Heat { shade, .. } => shade_class(shade),
    };
    if half { format!("cell cell--half {state}") } else { format!("cell {state}") }
}

/// Heat class for a shade, shared by cells and the legend.
pub fn shade_class(shade: Shade) -> String {
    format!("cell--heat-{}", shade.level())
}

/// Hover text for a cell: who is available there.
///
/// `None` while selecting, or before anyone has responded.
pub fn cell_title(view: CellView, responders: &[&str]) -> Option<String> {
    let CellView::Heat { coverage, total, .. } = view else {
        return None;
    };
    if total == 0 {
        return None;
    }
    if responders.is_empty() {
        Some(format!("{coverage}/{total} available"))
    } else {
        Some(format!("{coverage}/{total} available: {}", responders.join(", ")))
    }
}

/// Caption under a legend swatch.
pub fn legend_label(shade: Shade, total: usize) -> String {
    match shade {
        Shade::Neutral => format!("0/{total}"),
        Shade::Full => format!("{total}/{total}"),
        _ => String::new(),
    }
}
