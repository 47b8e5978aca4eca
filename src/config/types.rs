use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub offsets: OffsetConfig,
    #[serde(default)]
    pub copy: CopyConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

/// Grid geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Fixed bytes per row. Absent means fit to the container width.
    #[serde(default)]
    pub columns: Option<usize>,
    /// Width of one byte cell (hex pair + glyph) in pixels (default: 24).
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u32,
    /// Row height in pixels (default: 20).
    #[serde(default = "default_row_height_px")]
    pub row_height_px: u32,
    /// Rows rendered beyond the viewport on each side (default: 2).
    #[serde(default = "default_overscan_count")]
    pub overscan_count: usize,
    /// Rows scrolled per wheel notch (default: 1).
    #[serde(default = "default_wheel_step")]
    pub wheel_step: usize,
}

/// Address column formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetConfig {
    /// Radix of the address column, 2..=36 (default: 16).
    #[serde(default = "default_offset_base")]
    pub base: u32,
    /// Zero-padded width of the address column (default: 8).
    #[serde(default = "default_offset_width")]
    pub width: usize,
}

/// What a copy puts on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyMode {
    /// Upper-case hex pairs separated by spaces.
    #[default]
    Hex,
    /// The bytes decoded as UTF-8 (lossy).
    Text,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CopyConfig {
    #[serde(default)]
    pub mode: CopyMode,
}

/// How search input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Hex pattern when the input is valid hex, text otherwise.
    #[default]
    Auto,
    Hex,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub mode: SearchMode,
    /// Delay before a search keystroke is dispatched (default: 150).
    #[serde(default = "default_search_debounce_ms")]
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Minimum spacing of repeating actions (resize, wheel) in ms (default: 16).
    #[serde(default = "default_repeat_interval_ms")]
    pub repeat_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum tracked actions kept (default: 100).
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

fn default_cell_width_px() -> u32 {
    24
}

fn default_row_height_px() -> u32 {
    20
}

fn default_overscan_count() -> usize {
    2
}

fn default_wheel_step() -> usize {
    1
}

fn default_offset_base() -> u32 {
    16
}

fn default_offset_width() -> usize {
    8
}

fn default_search_debounce_ms() -> u64 {
    150
}

fn default_repeat_interval_ms() -> u64 {
    16
}

fn default_history_capacity() -> usize {
    100
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: None,
            cell_width_px: default_cell_width_px(),
            row_height_px: default_row_height_px(),
            overscan_count: default_overscan_count(),
            wheel_step: default_wheel_step(),
        }
    }
}

impl Default for OffsetConfig {
    fn default() -> Self {
        Self {
            base: default_offset_base(),
            width: default_offset_width(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::default(),
            debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            repeat_interval_ms: default_repeat_interval_ms(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}
