//! Copy feature module.

mod reducer;
mod state;

pub use reducer::{copy_range, CopyReducer};
pub use state::CopyState;
