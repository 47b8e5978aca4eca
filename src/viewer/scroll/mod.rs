//! Layout and scroll feature module.
//!
//! - `state.rs` - Grid dimensions and the clamped scroll index
//! - `reducer.rs` - Resize, wheel, virtualizer sync and explicit scroll targets

mod reducer;
mod state;

pub(crate) use reducer::scroll_to;
pub use reducer::ScrollReducer;
pub use state::{auto_columns, Dimension, LayoutState, ScrollState, DEFAULT_COLUMNS, DEFAULT_ROWS};
