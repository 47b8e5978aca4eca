//! Reducer for pointer interaction and selection.

use crate::geometry::CellsRendered;
use crate::viewer::action::ActionKind;
use crate::viewer::mvi::{ReduceContext, Reducer};
use crate::viewer::render::{render_range_class, CellClass, RenderEffect};
use crate::viewer::store::Store;

use super::state::{CellState, SelectionRange, SelectionState};

/// Owns `cell` and the pointer-driven part of `selection`.
///
/// A press starts a collapsed range (or extends from the anchor with shift),
/// entering cells while pressed drags its end, and a release that leaves the
/// range collapsed clears it.
pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;

    fn state(store: &Store) -> &Self::State {
        &store.selection
    }

    fn reduce(ctx: &ReduceContext<'_>, mut next: Store) -> Store {
        let len = ctx.document.len();
        match ctx.action {
            ActionKind::AppLoad { .. } => {
                next.cell = CellState::default();
                next.selection = SelectionState::default();
            }

            ActionKind::CellMouseEnter { index } if *index < len => {
                next.cell.mouse_enter_index = Some(*index);
                if next.is_cell_mouse_down() {
                    if let Some(range) = next.selection.range.as_mut() {
                        range.end = *index;
                    }
                }
            }

            ActionKind::CellMouseDown { index, shift } if *index < len => {
                let anchor = if *shift {
                    next.selection
                        .range
                        .map(|range| range.start)
                        .or(next.cursor.index)
                } else {
                    None
                };
                next.cell.mouse_down_index = Some(*index);
                next.selection.range = Some(match anchor {
                    Some(start) => SelectionRange::new(start, *index),
                    None => SelectionRange::at(*index),
                });
            }

            ActionKind::BodyMouseUp => {
                next.cell.mouse_down_index = None;
                if next.selection.range.is_some_and(|r| r.is_collapsed()) {
                    next.selection.range = None;
                }
            }

            ActionKind::BodyMouseLeave => {
                next.cell.mouse_enter_index = None;
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
        render_range_class(
            prev.selection.ordered(),
            next.selection.ordered(),
            CellClass::Selected,
            window,
            effects,
        );
    }
}
