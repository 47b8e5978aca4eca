use serde::Serialize;

use crate::viewer::mvi::UiState;

/// Last copied payload. `sequence` increments on every copy so that copying
/// the same text twice is still observed by the render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CopyState {
    pub sequence: u64,
    pub text: Option<String>,
}

impl UiState for CopyState {}
