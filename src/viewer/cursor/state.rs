use serde::Serialize;

use crate::viewer::mvi::UiState;

/// Keyboard cursor position, a byte index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CursorState {
    pub index: Option<usize>,
}

impl UiState for CursorState {}
