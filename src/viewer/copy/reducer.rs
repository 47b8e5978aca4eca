//! Reducer for clipboard copies.

use crate::config::CopyMode;
use crate::geometry::CellsRendered;
use crate::hex::{bytes_to_hex_string, HexDocument};
use crate::viewer::action::ActionKind;
use crate::viewer::mvi::{ReduceContext, Reducer};
use crate::viewer::render::RenderEffect;
use crate::viewer::store::Store;

use super::state::CopyState;

/// Copies the selection, or the cursor cell when nothing is selected.
pub struct CopyReducer;

impl Reducer for CopyReducer {
    type State = CopyState;

    fn state(store: &Store) -> &Self::State {
        &store.copy
    }

    fn reduce(ctx: &ReduceContext<'_>, mut next: Store) -> Store {
        if !matches!(ctx.action, ActionKind::CopyKeyDown) || !next.is_body_focused() {
            return next;
        }
        let Some((start, end)) = copy_range(&next) else {
            return next;
        };
        if let Some(text) = copy_text(ctx.document, start, end, next.settings.copy_mode) {
            next.copy.sequence += 1;
            next.copy.text = Some(text);
        }
        next
    }

    fn render(
        prev: &Store,
        next: &Store,
        _window: &CellsRendered,
        effects: &mut Vec<RenderEffect>,
    ) {
        if prev.copy.sequence == next.copy.sequence {
            return;
        }
        if let Some(text) = &next.copy.text {
            effects.push(RenderEffect::CopyToClipboard { text: text.clone() });
        }
    }
}

/// Inclusive range a copy would capture.
pub fn copy_range(store: &Store) -> Option<(usize, usize)> {
    store
        .selection
        .ordered()
        .or_else(|| store.cursor.index.map(|index| (index, index)))
}

fn copy_text(document: &HexDocument, start: usize, end: usize, mode: CopyMode) -> Option<String> {
    let bytes = document.slice(start, end);
    if bytes.is_empty() {
        return None;
    }
    Some(match mode {
        CopyMode::Hex => bytes_to_hex_string(bytes),
        CopyMode::Text => String::from_utf8_lossy(bytes).into_owned(),
    })
}
