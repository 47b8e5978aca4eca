//! Reducer for the hovered cell.

use crate::geometry::CellsRendered;
use crate::viewer::action::ActionKind;
use crate::viewer::mvi::{ReduceContext, Reducer};
use crate::viewer::render::{render_index_class, CellClass, RenderEffect};
use crate::viewer::store::Store;

use super::state::HoverState;

/// Follows `cell.mouse_enter_index`, which the selection reducer has already
/// updated in this dispatch. Hover is frozen while a drag is in progress and
/// cleared over the empty tail of the last row.
pub struct HoverReducer;

impl Reducer for HoverReducer {
    type State = HoverState;

    fn state(store: &Store) -> &Self::State {
        &store.hover
    }

    fn reduce(ctx: &ReduceContext<'_>, mut next: Store) -> Store {
        match ctx.action {
            ActionKind::CellMouseEnter { index } if !next.is_cell_mouse_down() => {
                next.hover.index = if *index < ctx.document.len() {
                    next.cell.mouse_enter_index
                } else {
                    None
                };
            }
            ActionKind::BodyMouseLeave | ActionKind::AppLoad { .. } => {
                next.hover.index = None;
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
            prev.hover.index,
            next.hover.index,
            CellClass::Hover,
            window,
            effects,
        );
    }
}
