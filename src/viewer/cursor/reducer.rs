//! Reducer for keyboard navigation.

use crate::geometry::{CellsRendered, ScrollPolicy};
use crate::viewer::action::{ActionKind, CursorKey};
use crate::viewer::mvi::{ReduceContext, Reducer};
use crate::viewer::render::{render_index_class, CellClass, RenderEffect};
use crate::viewer::scroll::scroll_to;
use crate::viewer::selection::SelectionRange;
use crate::viewer::store::Store;

use super::state::CursorState;

/// Owns `cursor`, and the keyboard-driven part of `selection`.
///
/// Shift extends the selection from its anchor; any other move collapses it.
/// Every move keeps the cursor visible with the `include` policy.
pub struct CursorReducer;

impl Reducer for CursorReducer {
    type State = CursorState;

    fn state(store: &Store) -> &Self::State {
        &store.cursor
    }

    fn reduce(ctx: &ReduceContext<'_>, mut next: Store) -> Store {
        let len = ctx.document.len();
        match ctx.action {
            ActionKind::AppLoad { .. } => {
                next.cursor.index = None;
            }

            ActionKind::AppLocationInit {
                offset: Some(offset),
            } if len > 0 => {
                next.cursor.index = Some(ctx.document.clamp_index(*offset as i64));
            }

            ActionKind::CellMouseDown { index, .. } if *index < len => {
                next.cursor.index = Some(*index);
            }

            ActionKind::CursorKeyDown { key, shift, ctrl } if len > 0 && next.is_body_focused() => {
                let current = next
                    .cursor
                    .index
                    .unwrap_or_else(|| next.cells_rendered().visible_start_index)
                    .min(len - 1);
                let grid = next.grid();
                let target = move_cursor(current, *key, *ctrl, grid.columns, grid.rows, len);

                next.selection.range = if *shift {
                    let anchor = next
                        .selection
                        .range
                        .map(|range| range.start)
                        .unwrap_or(current);
                    Some(SelectionRange::new(anchor, target))
                } else {
                    None
                };
                next.cursor.index = Some(target);
                next.scroll.index = scroll_to(&next, target as i64, ScrollPolicy::Include);
            }

            _ => {}
        }
        next
    }

    fn render(
        prev: &Store,
        next: &Store,
        window: &CellsRendered,
        effects: &mut Vec<RenderEffect>,
    ) {
        render_index_class(
            prev.cursor.index,
            next.cursor.index,
            CellClass::Cursor,
            window,
            effects,
        );
    }
}

/// Cursor index after pressing `key`, kept inside `0..len`.
fn move_cursor(
    current: usize,
    key: CursorKey,
    ctrl: bool,
    columns: usize,
    rows: usize,
    len: usize,
) -> usize {
    let last = len - 1;
    let columns = columns.max(1);
    let page = columns * rows.max(1);
    let row_start = current - current % columns;

    match key {
        CursorKey::Left => current.saturating_sub(1),
        CursorKey::Right => (current + 1).min(last),
        CursorKey::Up => current.checked_sub(columns).unwrap_or(current),
        CursorKey::Down => {
            if current + columns <= last {
                current + columns
            } else {
                current
            }
        }
        CursorKey::PageUp => {
            if current >= page {
                current - page
            } else {
                current % columns
            }
        }
        CursorKey::PageDown => (current + page).min(last),
        CursorKey::Home if ctrl => 0,
        CursorKey::Home => row_start,
        CursorKey::End if ctrl => last,
        CursorKey::End => (row_start + columns - 1).min(last),
    }
}
