//! Model-View-Intent (MVI) primitives for the viewer.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ reduce (all reducers, fixed order) ──→ Store ──→ reconcile ──→ RenderEffect
//!    ↑                                                                          │
//!    └──────────────────────────── input / collaborators ───────────────────────┘
//! ```
//!
//! - **State**: plain, comparable slices of the [`Store`](crate::viewer::Store)
//! - **Intent**: the closed [`Action`](crate::viewer::Action) catalog
//! - **Reducer**: pure `(previous, next, action) -> next` transition per concern,
//!   paired with a render step that diffs previous and next

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::{ReduceContext, Reducer};
pub use state::UiState;
