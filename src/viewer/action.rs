//! The closed catalog of actions accepted by the viewer.

use crate::geometry::ScrollPolicy;
use crate::viewer::mvi::Intent;
use crate::viewer::settings::Settings;
use crate::viewer::store::Focus;

/// Cursor movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorKey {
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

/// Direction of search result navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStep {
    Next,
    Previous,
}

/// Callback payload of the virtualized list, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemsRendered {
    pub visible_start_index: usize,
    pub visible_stop_index: usize,
    pub overscan_start_index: usize,
    pub overscan_stop_index: usize,
}

/// Action kind and payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    /// A document arrived; `valid` is the source's validity flag.
    AppLoad { valid: bool },
    SettingLoad { settings: Settings },
    /// Optional deep-link offset to place the cursor at.
    AppLocationInit { offset: Option<usize> },
    /// `initialized: true` is the fast path straight to the ready state.
    BodyInit { initialized: bool },
    BodyRefInit { ready: bool },
    /// Container size in pixels.
    BodyResize { width: u32, height: u32 },
    BodyScrollInit,
    BodyItemsRendered(ItemsRendered),
    BodyMouseLeave,
    BodyMouseUp,
    /// Wheel notches; positive scrolls towards the end.
    BodyScrollWheel { delta_y: i32 },
    FocusChange { focus: Focus },
    CellMouseEnter { index: usize },
    CellMouseDown { index: usize, shift: bool },
    CursorKeyDown { key: CursorKey, shift: bool, ctrl: bool },
    CopyKeyDown,
    SearchChange { input: String },
    SearchNavigate { step: SearchStep },
    SearchClear,
    ScrollToIndex { index: i64, policy: ScrollPolicy },
}

impl ActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AppLoad { .. } => "appLoad",
            Self::SettingLoad { .. } => "settingLoad",
            Self::AppLocationInit { .. } => "appLocationInit",
            Self::BodyInit { .. } => "bodyInit",
            Self::BodyRefInit { .. } => "bodyRefInit",
            Self::BodyResize { .. } => "bodyResize",
            Self::BodyScrollInit => "bodyScrollInit",
            Self::BodyItemsRendered(_) => "bodyItemsRendered",
            Self::BodyMouseLeave => "bodyMouseLeave",
            Self::BodyMouseUp => "bodyMouseUp",
            Self::BodyScrollWheel { .. } => "bodyScrollWheel",
            Self::FocusChange { .. } => "focusChange",
            Self::CellMouseEnter { .. } => "cellMouseEnter",
            Self::CellMouseDown { .. } => "cellMouseDown",
            Self::CursorKeyDown { .. } => "cursorKeyDown",
            Self::CopyKeyDown => "copyKeyDown",
            Self::SearchChange { .. } => "searchChange",
            Self::SearchNavigate { .. } => "searchNavigate",
            Self::SearchClear => "searchClear",
            Self::ScrollToIndex { .. } => "scrollToIndex",
        }
    }
}

/// A dispatched action with its scheduling hints.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub kind: ActionKind,
    /// Recorded as one history entry.
    pub tracked: bool,
    /// Fires continuously and may be coalesced before dispatch.
    pub repeat: bool,
}

impl Action {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            tracked: false,
            repeat: false,
        }
    }

    pub fn tracked(mut self) -> Self {
        self.tracked = true;
        self
    }

    pub fn repeating(mut self) -> Self {
        self.repeat = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl From<ActionKind> for Action {
    fn from(kind: ActionKind) -> Self {
        Self::new(kind)
    }
}

impl Intent for Action {
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn is_tracked(&self) -> bool {
        self.tracked
    }
}
