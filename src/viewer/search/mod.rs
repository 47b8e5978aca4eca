//! Search feature module.
//!
//! - `state.rs` - Input, ordered match offsets and the selected result
//! - `reducer.rs` - Recompute on change, wrap-around navigation, clear

mod reducer;
mod state;

pub use reducer::SearchReducer;
pub use state::{search_pattern, SearchState};
