//! Conversions between linear byte offsets, grid rows and the rendered window.
//!
//! The grid is `columns` bytes wide; the viewport shows `rows` rows starting
//! at the scroll index (a row number, not a byte offset).

use serde::{Deserialize, Serialize};

/// Grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridSize {
    pub columns: usize,
    pub rows: usize,
}

/// Where a target row should land inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrollPolicy {
    /// Target row becomes the first visible row.
    Top,
    /// Target row is vertically centred.
    Middle,
    /// Target row becomes the last visible row.
    Bottom,
    /// Minimal scroll: no change when visible, else snap to the nearer edge.
    Include,
    /// No change when visible, else re-centre.
    IncludeMiddle,
    /// `Include` within one window of margin, re-centre beyond it.
    Smart,
}

/// Alignment vocabulary of the virtualized list collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAlign {
    Start,
    Center,
    End,
    Auto,
    Smart,
}

impl ScrollPolicy {
    pub const ALL: [ScrollPolicy; 6] = [
        Self::Top,
        Self::Middle,
        Self::Bottom,
        Self::Include,
        Self::IncludeMiddle,
        Self::Smart,
    ];

    pub fn align(self) -> ScrollAlign {
        match self {
            Self::Top => ScrollAlign::Start,
            Self::Middle | Self::IncludeMiddle => ScrollAlign::Center,
            Self::Bottom => ScrollAlign::End,
            Self::Include => ScrollAlign::Auto,
            Self::Smart => ScrollAlign::Smart,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
            Self::Include => "include",
            Self::IncludeMiddle => "include-middle",
            Self::Smart => "smart",
        }
    }

    /// Accepts both `include-middle` and `includeMiddle`.
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "top" => Some(Self::Top),
            "middle" => Some(Self::Middle),
            "bottom" => Some(Self::Bottom),
            "include" => Some(Self::Include),
            "includemiddle" => Some(Self::IncludeMiddle),
            "smart" => Some(Self::Smart),
            _ => None,
        }
    }
}

/// Row containing byte `index`.
pub fn row_index(index: usize, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    index / columns
}

/// Number of rows needed to show `total` bytes.
pub fn row_count(total: usize, columns: usize) -> usize {
    if columns == 0 {
        return 0;
    }
    total.div_ceil(columns)
}

/// Largest valid scroll index: `ceil(total / columns) - rows`, floored at 0.
pub fn scroll_max_index(total: usize, columns: usize, rows: usize) -> usize {
    row_count(total, columns).saturating_sub(rows)
}

pub fn clamp_scroll_index(index: i64, max_index: usize) -> usize {
    if index <= 0 {
        0
    } else {
        (index as u64).min(max_index as u64) as usize
    }
}

fn is_row_outside(row: i64, scroll_index: i64, rows: i64) -> bool {
    row < scroll_index || row > scroll_index + rows - 1
}

fn include_row(row: i64, scroll_index: i64, rows: i64) -> i64 {
    if row < scroll_index {
        row
    } else if row > scroll_index + rows - 1 {
        row - rows + 1
    } else {
        scroll_index
    }
}

fn centre_row(target: i64, columns: i64, rows: i64) -> i64 {
    (target as f64 / columns as f64 - rows as f64 / 2.0).floor() as i64
}

/// New scroll index bringing byte `target` into view according to `policy`.
///
/// Negative targets and a degenerate grid leave the scroll index unchanged.
pub fn scroll_to_index(
    grid: GridSize,
    scroll_index: usize,
    max_index: usize,
    target: i64,
    policy: ScrollPolicy,
) -> usize {
    if target < 0 || grid.columns == 0 || grid.rows == 0 {
        return scroll_index;
    }

    let columns = grid.columns as i64;
    let rows = grid.rows as i64;
    let current = scroll_index as i64;
    let row = target / columns;

    let next = match policy {
        ScrollPolicy::Top => row,
        ScrollPolicy::Middle => centre_row(target, columns, rows),
        ScrollPolicy::Bottom => row - rows + 1,
        ScrollPolicy::Include => include_row(row, current, rows),
        ScrollPolicy::IncludeMiddle => {
            if is_row_outside(row, current, rows) {
                centre_row(target, columns, rows)
            } else {
                current
            }
        }
        ScrollPolicy::Smart => {
            let distance = columns * rows;
            let before = current * columns - distance;
            let after = (current + rows) * columns + distance;
            if (before..=after).contains(&target) {
                include_row(row, current, rows)
            } else if is_row_outside(row, current, rows) {
                centre_row(target, columns, rows)
            } else {
                current
            }
        }
    };

    clamp_scroll_index(next, max_index)
}

/// The materialized window, in rows and in byte offsets.
///
/// Always derived from the scroll slice and layout; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CellsRendered {
    pub overscan_start_row_index: usize,
    pub overscan_stop_row_index: usize,
    pub visible_start_row_index: usize,
    pub visible_stop_row_index: usize,

    pub overscan_start_index: usize,
    pub overscan_stop_index: usize,
    pub visible_start_index: usize,
    pub visible_stop_index: usize,

    /// Exclusive byte bound of cells that currently have a live node.
    pub live_stop_index: usize,
}

impl CellsRendered {
    pub fn compute(
        scroll_index: usize,
        max_index: usize,
        overscan_count: usize,
        grid: GridSize,
        total_bytes: usize,
    ) -> Self {
        let columns = grid.columns;
        let overscan_start_row_index = scroll_index.saturating_sub(overscan_count);
        let overscan_stop_row_index = (scroll_index + overscan_count + grid.rows).min(max_index);
        let visible_start_row_index = scroll_index;
        let visible_stop_row_index = (scroll_index + grid.rows).min(max_index);
        let live_stop_row_index =
            (scroll_index + overscan_count + grid.rows).min(row_count(total_bytes, columns));

        Self {
            overscan_start_row_index,
            overscan_stop_row_index,
            visible_start_row_index,
            visible_stop_row_index,
            overscan_start_index: overscan_start_row_index * columns,
            overscan_stop_index: overscan_stop_row_index * columns,
            visible_start_index: visible_start_row_index * columns,
            visible_stop_index: visible_stop_row_index * columns,
            live_stop_index: (live_stop_row_index * columns).min(total_bytes),
        }
    }

    /// Whether the cell at `index` is materialized.
    pub fn is_live(&self, index: usize) -> bool {
        index >= self.overscan_start_index && index < self.live_stop_index
    }
}
