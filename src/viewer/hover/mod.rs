//! Hover feature module.

mod reducer;
mod state;

pub use reducer::HoverReducer;
pub use state::HoverState;
