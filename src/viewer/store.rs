//! The store aggregate and the root reduce / reconcile passes.

use serde::Serialize;

use crate::geometry::{CellsRendered, GridSize};
use crate::hex::HexDocument;
use crate::viewer::action::ActionKind;
use crate::viewer::copy::{CopyReducer, CopyState};
use crate::viewer::cursor::{CursorReducer, CursorState};
use crate::viewer::hover::{HoverReducer, HoverState};
use crate::viewer::loading::{LoadingReducer, LoadingState};
use crate::viewer::mvi::{ReduceContext, Reducer, UiState};
use crate::viewer::render::RenderEffect;
use crate::viewer::scroll::{LayoutState, ScrollReducer, ScrollState};
use crate::viewer::search::{SearchReducer, SearchState};
use crate::viewer::selection::{CellState, SelectionReducer, SelectionState};
use crate::viewer::settings::Settings;

/// Which part of the viewer holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    #[default]
    None,
    Body,
    Search,
}

impl UiState for Focus {}

/// Single source of truth for one viewer instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Store {
    pub loading: LoadingState,
    pub settings: Settings,
    pub layout: LayoutState,
    pub scroll: ScrollState,
    pub focus: Focus,
    pub cell: CellState,
    pub selection: SelectionState,
    pub hover: HoverState,
    pub search: SearchState,
    pub cursor: CursorState,
    pub copy: CopyState,
}

impl Store {
    /// Initial store for a document of `byte_count` bytes.
    pub fn new(settings: Settings, byte_count: usize) -> Self {
        let layout = LayoutState::new(&settings, byte_count);
        let scroll = ScrollState::new(&settings, &layout);
        Self {
            loading: LoadingState::default(),
            settings,
            layout,
            scroll,
            ..Self::default()
        }
    }

    pub fn grid(&self) -> GridSize {
        self.layout.grid()
    }

    /// The live window, derived from scroll and layout on every call.
    pub fn cells_rendered(&self) -> CellsRendered {
        CellsRendered::compute(
            self.scroll.index,
            self.scroll.max_index,
            self.scroll.overscan_count,
            self.grid(),
            self.layout.byte_count,
        )
    }

    /// Whether keyboard input belongs to the byte grid.
    pub fn is_body_focused(&self) -> bool {
        self.focus == Focus::Body
    }

    /// Whether a mouse drag started on a cell is in progress.
    pub fn is_cell_mouse_down(&self) -> bool {
        self.cell.mouse_down_index.is_some()
    }
}

type ReduceFn = for<'a, 'b> fn(&'a ReduceContext<'b>, Store) -> Store;
type RenderFn = fn(&Store, &Store, &CellsRendered, &mut Vec<RenderEffect>);

/// Reducers in dispatch order; later ones observe earlier output.
const REDUCERS: [ReduceFn; 7] = [
    LoadingReducer::reduce,
    ScrollReducer::reduce,
    SelectionReducer::reduce,
    HoverReducer::reduce,
    SearchReducer::reduce,
    CursorReducer::reduce,
    CopyReducer::reduce,
];

const RENDERS: [RenderFn; 7] = [
    render_slice::<LoadingReducer>,
    render_slice::<ScrollReducer>,
    render_slice::<SelectionReducer>,
    render_slice::<HoverReducer>,
    render_slice::<SearchReducer>,
    render_slice::<CursorReducer>,
    render_slice::<CopyReducer>,
];

fn render_slice<R: Reducer>(
    prev: &Store,
    next: &Store,
    window: &CellsRendered,
    effects: &mut Vec<RenderEffect>,
) {
    if R::state(prev) != R::state(next) {
        R::render(prev, next, window, effects);
    }
}

/// Fold every reducer over `action`, starting from `prev`.
pub fn reduce(prev: &Store, action: &ActionKind, document: &HexDocument) -> Store {
    let ctx = ReduceContext {
        prev,
        action,
        document,
    };
    REDUCERS
        .iter()
        .fold(prev.clone(), |next, reducer| reducer(&ctx, next))
}

/// Visual effects turning the rendering of `prev` into that of `next`.
pub fn reconcile(prev: &Store, next: &Store) -> Vec<RenderEffect> {
    let window = next.cells_rendered();
    let mut effects = Vec::new();
    for render in RENDERS {
        render(prev, next, &window, &mut effects);
    }
    effects
}
