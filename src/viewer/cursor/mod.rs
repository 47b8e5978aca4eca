//! Keyboard cursor feature module.

mod reducer;
mod state;

pub use reducer::CursorReducer;
pub use state::CursorState;
