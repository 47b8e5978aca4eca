//! Loading feature module.
//!
//! Drives the progress indicator through the startup milestones until the
//! body is ready.
//!
//! - `state.rs` - Progress, readiness flags and the invalid-data latch
//! - `reducer.rs` - Milestone transitions (pure, no side effects)

mod reducer;
mod state;

pub use reducer::LoadingReducer;
pub use state::{LoadingState, Milestone};
