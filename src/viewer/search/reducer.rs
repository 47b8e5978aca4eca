//! Reducer for search input and result navigation.

use std::collections::BTreeSet;

use crate::geometry::{CellsRendered, ScrollPolicy};
use crate::viewer::action::{ActionKind, SearchStep};
use crate::viewer::mvi::{ReduceContext, Reducer};
use crate::viewer::render::{render_range_class, CellClass, RenderEffect};
use crate::viewer::scroll::scroll_to;
use crate::viewer::selection::SelectionRange;
use crate::viewer::store::Store;

use super::state::SearchState;

/// Owns `search`. Selecting a result moves the cursor onto the match,
/// selects it and scrolls it into view with the `smart` policy.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;

    fn state(store: &Store) -> &Self::State {
        &store.search
    }

    fn reduce(ctx: &ReduceContext<'_>, mut next: Store) -> Store {
        match ctx.action {
            ActionKind::SearchChange { input } => {
                let mode = next.settings.search_mode;
                next.search = SearchState::for_input(input, mode, ctx.document);
                reveal_selected(next)
            }

            ActionKind::SearchNavigate { step } => {
                next.search.selected_result =
                    wrap_result(next.search.selected_result, next.search.results.len(), *step);
                reveal_selected(next)
            }

            ActionKind::SearchClear | ActionKind::AppLoad { .. } => {
                next.search = SearchState::default();
                next
            }

            ActionKind::SettingLoad { settings } => {
                if let Some(input) = next.search.input_value.clone() {
                    let selected = next.search.selected_result;
                    let mut search =
                        SearchState::for_input(&input, settings.search_mode, ctx.document);
                    if selected.is_some_and(|s| s < search.results.len()) {
                        search.selected_result = selected;
                    }
                    next.search = search;
                }
                next
            }

            _ => next,
        }
    }

    fn render(
        prev: &Store,
        next: &Store,
        window: &CellsRendered,
        effects: &mut Vec<RenderEffect>,
    ) {
        if prev.search.results != next.search.results
            || prev.search.pattern_len != next.search.pattern_len
        {
            let before = live_match_cells(&prev.search, window);
            let after = live_match_cells(&next.search, window);
            for index in before.difference(&after) {
                effects.push(RenderEffect::RemoveClass {
                    index: *index,
                    class: CellClass::SearchMatch,
                });
            }
            for index in after.difference(&before) {
                effects.push(RenderEffect::AddClass {
                    index: *index,
                    class: CellClass::SearchMatch,
                });
            }
        }

        render_range_class(
            prev.search.selected_range(),
            next.search.selected_range(),
            CellClass::SearchSelected,
            window,
            effects,
        );
    }
}

/// Next selected result, wrapping modulo `count`.
fn wrap_result(selected: Option<usize>, count: usize, step: SearchStep) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match (selected, step) {
        (None, SearchStep::Next) => 0,
        (None, SearchStep::Previous) => count - 1,
        (Some(current), SearchStep::Next) => (current + 1) % count,
        (Some(current), SearchStep::Previous) => (current + count - 1) % count,
    })
}

fn reveal_selected(mut next: Store) -> Store {
    if let Some((start, end)) = next.search.selected_range() {
        next.cursor.index = Some(start);
        next.selection.range = Some(SelectionRange::new(start, end));
        next.scroll.index = scroll_to(&next, start as i64, ScrollPolicy::Smart);
    }
    next
}

/// Live cells covered by any match.
fn live_match_cells(search: &SearchState, window: &CellsRendered) -> BTreeSet<usize> {
    let len = search.pattern_len.max(1);
    let first = window.overscan_start_index;
    let mut cells = BTreeSet::new();
    // matches starting up to `len - 1` bytes before the window still reach into it
    let from = search
        .results
        .partition_point(|offset| offset + len <= first);
    for offset in &search.results[from..] {
        if *offset >= window.live_stop_index {
            break;
        }
        for index in *offset..offset + len {
            if window.is_live(index) {
                cells.insert(index);
            }
        }
    }
    cells
}
