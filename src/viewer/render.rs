//! Render reconciliation: minimal visual updates keyed by cell index.
//!
//! Reducers never touch the view. After a dispatch the render pass compares
//! the previous and next store and emits [`RenderEffect`]s; the rendering
//! collaborator applies them to whatever nodes it keeps for live cells.

use serde::Serialize;

use crate::geometry::{CellsRendered, ScrollAlign};

/// Visual marker toggled on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellClass {
    Hover,
    Cursor,
    Selected,
    SearchMatch,
    SearchSelected,
}

/// A side effect for the rendering and clipboard collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "kebab-case")]
pub enum RenderEffect {
    AddClass { index: usize, class: CellClass },
    RemoveClass { index: usize, class: CellClass },
    /// Ask the virtualized list to bring `row` into view.
    ScrollToItem { row: usize, align: ScrollAlign },
    CopyToClipboard { text: String },
}

/// Consumer of render effects (the view layer).
pub trait RenderTarget {
    fn apply(&mut self, effect: &RenderEffect);
}

impl RenderTarget for Vec<RenderEffect> {
    fn apply(&mut self, effect: &RenderEffect) {
        self.push(effect.clone());
    }
}

/// Move a single-cell marker from `prev` to `next`.
pub fn render_index_class(
    prev: Option<usize>,
    next: Option<usize>,
    class: CellClass,
    window: &CellsRendered,
    effects: &mut Vec<RenderEffect>,
) {
    if prev == next {
        return;
    }
    if let Some(index) = prev.filter(|i| window.is_live(*i)) {
        effects.push(RenderEffect::RemoveClass { index, class });
    }
    if let Some(index) = next.filter(|i| window.is_live(*i)) {
        effects.push(RenderEffect::AddClass { index, class });
    }
}

/// Inclusive index range, start <= end.
pub type IndexRange = (usize, usize);

fn contains(range: Option<IndexRange>, index: usize) -> bool {
    range.is_some_and(|(start, end)| index >= start && index <= end)
}

/// Update a marker spanning a range: only cells whose membership changed
/// and that are live get an effect.
pub fn render_range_class(
    prev: Option<IndexRange>,
    next: Option<IndexRange>,
    class: CellClass,
    window: &CellsRendered,
    effects: &mut Vec<RenderEffect>,
) {
    if prev == next {
        return;
    }
    let live_start = window.overscan_start_index;
    let live_stop = window.live_stop_index;

    if let Some((start, end)) = prev {
        for index in start.max(live_start)..=end.min(live_stop.saturating_sub(1)) {
            if !contains(next, index) && window.is_live(index) {
                effects.push(RenderEffect::RemoveClass { index, class });
            }
        }
    }
    if let Some((start, end)) = next {
        for index in start.max(live_start)..=end.min(live_stop.saturating_sub(1)) {
            if !contains(prev, index) && window.is_live(index) {
                effects.push(RenderEffect::AddClass { index, class });
            }
        }
    }
}
