//! Reducer for layout and scroll position.

use crate::geometry::{clamp_scroll_index, scroll_to_index, CellsRendered, ScrollPolicy};
use crate::viewer::action::ActionKind;
use crate::viewer::mvi::{ReduceContext, Reducer};
use crate::viewer::render::RenderEffect;
use crate::viewer::store::Store;

use super::state::{auto_columns, Dimension, ScrollState};

/// Owns `layout` and `scroll`. Every path re-clamps against the scroll bound.
pub struct ScrollReducer;

impl Reducer for ScrollReducer {
    type State = ScrollState;

    fn state(store: &Store) -> &Self::State {
        &store.scroll
    }

    fn reduce(ctx: &ReduceContext<'_>, mut next: Store) -> Store {
        match ctx.action {
            ActionKind::AppLoad { .. } => {
                next.layout.byte_count = ctx.document.len();
                next.scroll.index = 0;
                next.scroll = next.scroll.refit(&next.layout);
            }

            ActionKind::SettingLoad { settings } => {
                if let Some(columns) = settings.columns {
                    next.layout.column = Dimension {
                        size: columns.max(1),
                    };
                }
                next.scroll.overscan_count = settings.overscan_count;
                next.scroll = next.scroll.refit(&next.layout);
            }

            ActionKind::BodyResize { width, height } => {
                let settings = &next.settings;
                let rows = (*height / settings.row_height_px.max(1)).max(1) as usize;
                let columns = settings
                    .columns
                    .unwrap_or_else(|| auto_columns(*width, settings.cell_width_px));
                next.layout.row = Dimension { size: rows };
                next.layout.column = Dimension {
                    size: columns.max(1),
                };
                next.scroll = next.scroll.refit(&next.layout);
            }

            ActionKind::BodyScrollWheel { delta_y } => {
                let step = next.settings.wheel_step as i64;
                let target = next.scroll.index as i64 + i64::from(*delta_y) * step;
                next.scroll.index = clamp_scroll_index(target, next.scroll.max_index);
            }

            ActionKind::BodyItemsRendered(event) => {
                next.scroll.index =
                    clamp_scroll_index(event.visible_start_index as i64, next.scroll.max_index);
            }

            ActionKind::ScrollToIndex { index, policy } => {
                next.scroll.index = scroll_to(&next, *index, *policy);
            }

            ActionKind::AppLocationInit {
                offset: Some(offset),
            } if !ctx.document.is_empty() => {
                let target = ctx.document.clamp_index(*offset as i64);
                next.scroll.index = scroll_to(&next, target as i64, ScrollPolicy::Top);
            }

            _ => {}
        }
        next
    }

    fn render(
        prev: &Store,
        next: &Store,
        _window: &CellsRendered,
        effects: &mut Vec<RenderEffect>,
    ) {
        if prev.scroll.index != next.scroll.index {
            effects.push(RenderEffect::ScrollToItem {
                row: next.scroll.index,
                align: ScrollPolicy::Top.align(),
            });
        }
    }
}

/// Scroll index for bringing byte `index` into view under `policy`.
pub(crate) fn scroll_to(store: &Store, index: i64, policy: ScrollPolicy) -> usize {
    scroll_to_index(
        store.grid(),
        store.scroll.index,
        store.scroll.max_index,
        index,
        policy,
    )
}
