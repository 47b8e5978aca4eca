use serde::Serialize;

use crate::viewer::mvi::UiState;

/// The single hovered cell, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HoverState {
    pub index: Option<usize>,
}

impl UiState for HoverState {}
