//! State for cell interactions and the selection range.

use serde::Serialize;

use crate::viewer::mvi::UiState;

/// Last pointer positions over the grid. Ephemeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellState {
    pub mouse_enter_index: Option<usize>,
    /// Set while the button is held after a press on a cell.
    pub mouse_down_index: Option<usize>,
}

impl UiState for CellState {}

/// Selected byte range, direction-aware.
///
/// `start` is the anchor (where the selection began) and `end` follows the
/// pointer or cursor, so `start > end` is a backwards selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Collapsed range at `index`.
    pub fn at(index: usize) -> Self {
        Self::new(index, index)
    }

    /// Get ordered (first, last) indices for iteration.
    pub fn ordered(&self) -> (usize, usize) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        let (first, last) = self.ordered();
        index >= first && index <= last
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }

    /// Number of bytes covered.
    pub fn len(&self) -> usize {
        let (first, last) = self.ordered();
        last - first + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SelectionState {
    pub range: Option<SelectionRange>,
}

impl UiState for SelectionState {}

impl SelectionState {
    pub fn ordered(&self) -> Option<(usize, usize)> {
        self.range.map(|range| range.ordered())
    }
}
