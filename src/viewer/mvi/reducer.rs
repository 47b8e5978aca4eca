//! Reducer trait for the viewer store.

use crate::geometry::CellsRendered;
use crate::hex::HexDocument;
use crate::viewer::action::ActionKind;
use crate::viewer::render::RenderEffect;
use crate::viewer::store::Store;

use super::UiState;

/// Read-only inputs shared by every reducer during one dispatch.
#[derive(Debug, Clone, Copy)]
pub struct ReduceContext<'a> {
    /// Store as it was before the dispatch started.
    pub prev: &'a Store,
    pub action: &'a ActionKind,
    pub document: &'a HexDocument,
}

/// One concern of the store.
///
/// `reduce` receives the store as already advanced by the reducers that ran
/// earlier in the same dispatch and must be a pure function: no side effects,
/// no panics for any payload. Unrecognized actions return `next` unchanged.
pub trait Reducer {
    /// The slice this reducer owns.
    type State: UiState;

    fn state(store: &Store) -> &Self::State;

    fn reduce(ctx: &ReduceContext<'_>, next: Store) -> Store;

    /// Visual side effects for the change from `prev` to `next`.
    ///
    /// Only called when [`Reducer::state`] differs between the two.
    ///
    /// `window` is the live window of `next`; indices outside it have no
    /// node to update and must be skipped.
    fn render(
        _prev: &Store,
        _next: &Store,
        _window: &CellsRendered,
        _effects: &mut Vec<RenderEffect>,
    ) {
    }
}
