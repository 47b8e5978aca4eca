//! Mouse interaction and selection feature module.
//!
//! - `state.rs` - Last cell interaction positions and the selected range
//! - `reducer.rs` - Press / drag / release transitions

mod reducer;
mod state;

pub use reducer::SelectionReducer;
pub use state::{CellState, SelectionRange, SelectionState};
