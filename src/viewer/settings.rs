//! Viewer settings slice, loaded through the `SettingLoad` milestone.

use serde::Serialize;

use crate::config::{Config, CopyMode, SearchMode};
use crate::viewer::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub offset_base: u32,
    pub offset_width: usize,
    pub copy_mode: CopyMode,
    pub search_mode: SearchMode,
    /// Fixed bytes per row; `None` fits the row to the container.
    pub columns: Option<usize>,
    pub cell_width_px: u32,
    pub row_height_px: u32,
    pub overscan_count: usize,
    pub wheel_step: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            offset_base: config.offsets.base,
            offset_width: config.offsets.width,
            copy_mode: config.copy.mode,
            search_mode: config.search.mode,
            columns: config.layout.columns,
            cell_width_px: config.layout.cell_width_px.max(1),
            row_height_px: config.layout.row_height_px.max(1),
            overscan_count: config.layout.overscan_count,
            wheel_step: config.layout.wheel_step.max(1),
        }
    }
}

impl UiState for Settings {}
