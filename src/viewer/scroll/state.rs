//! State for the grid layout and scroll position.

use serde::Serialize;

use crate::geometry::{clamp_scroll_index, scroll_max_index, GridSize};
use crate::viewer::mvi::UiState;
use crate::viewer::settings::Settings;

/// Bytes per row before the container has been measured.
pub const DEFAULT_COLUMNS: usize = 16;
/// Visible rows before the container has been measured.
pub const DEFAULT_ROWS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimension {
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    pub row: Dimension,
    pub column: Dimension,
    /// Length of the loaded document.
    pub byte_count: usize,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            row: Dimension { size: DEFAULT_ROWS },
            column: Dimension {
                size: DEFAULT_COLUMNS,
            },
            byte_count: 0,
        }
    }
}

impl UiState for LayoutState {}

impl LayoutState {
    pub fn new(settings: &Settings, byte_count: usize) -> Self {
        Self {
            column: Dimension {
                size: settings.columns.unwrap_or(DEFAULT_COLUMNS).max(1),
            },
            byte_count,
            ..Self::default()
        }
    }

    pub fn grid(&self) -> GridSize {
        GridSize {
            columns: self.column.size,
            rows: self.row.size,
        }
    }

    pub fn scroll_max_index(&self) -> usize {
        scroll_max_index(self.byte_count, self.column.size, self.row.size)
    }
}

/// Largest power of two not above `width / cell_width`, at least 1.
pub fn auto_columns(width: u32, cell_width: u32) -> usize {
    let fit = (width / cell_width.max(1)).max(1) as usize;
    1 << (usize::BITS - 1 - fit.leading_zeros())
}

/// Scroll position in rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollState {
    /// First visible row, `0 <= index <= max_index`.
    pub index: usize,
    pub max_index: usize,
    pub overscan_count: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            index: 0,
            max_index: 0,
            overscan_count: Settings::default().overscan_count,
        }
    }
}

impl UiState for ScrollState {}

impl ScrollState {
    pub fn new(settings: &Settings, layout: &LayoutState) -> Self {
        Self {
            index: 0,
            max_index: layout.scroll_max_index(),
            overscan_count: settings.overscan_count,
        }
    }

    /// Recompute the bound for `layout` and re-clamp the index.
    pub fn refit(self, layout: &LayoutState) -> Self {
        let max_index = layout.scroll_max_index();
        Self {
            index: clamp_scroll_index(self.index as i64, max_index),
            max_index,
            ..self
        }
    }
}
