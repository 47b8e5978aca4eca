//! Reducer for the loading milestones.

use crate::viewer::action::ActionKind;
use crate::viewer::mvi::{ReduceContext, Reducer};
use crate::viewer::store::Store;

use super::state::{LoadingState, Milestone, INVALID_DATA_MESSAGE};

/// Startup state machine.
///
/// Progress only moves forward. Invalid data latches `is_invalid_data` and
/// freezes every milestone until a valid `AppLoad` arrives. Once
/// `initialized`, a `BodyInit { initialized: false }` is ignored.
pub struct LoadingReducer;

impl Reducer for LoadingReducer {
    type State = LoadingState;

    fn state(store: &Store) -> &Self::State {
        &store.loading
    }

    fn reduce(ctx: &ReduceContext<'_>, mut next: Store) -> Store {
        if let ActionKind::SettingLoad { settings } = ctx.action {
            next.settings = settings.clone();
        }
        next.loading = reduce_loading(next.loading, ctx.action);
        next
    }
}

fn reduce_loading(state: LoadingState, action: &ActionKind) -> LoadingState {
    if let ActionKind::AppLoad { valid } = action {
        return if *valid {
            LoadingState {
                is_invalid_data: false,
                error: false,
                ..state
            }
            .advance(Milestone::AppLoad)
        } else {
            LoadingState {
                is_invalid_data: true,
                error: true,
                message: INVALID_DATA_MESSAGE.to_string(),
                ..state
            }
        };
    }

    if state.is_halted() {
        return state;
    }

    match action {
        ActionKind::SettingLoad { .. } => LoadingState {
            has_loaded_settings: true,
            ..state
        }
        .advance(Milestone::SettingLoad),

        ActionKind::AppLocationInit { .. } => state.advance(Milestone::AppLocationInit),

        ActionKind::BodyInit { initialized: true } => LoadingState::ready(),

        ActionKind::BodyInit { initialized: false } => {
            if state.initialized {
                state
            } else {
                LoadingState {
                    refs_ready: false,
                    has_resized: false,
                    has_scrolled: false,
                    error: false,
                    ..state
                }
                .advance(Milestone::BodyInit)
            }
        }

        ActionKind::BodyItemsRendered(_) => {
            if state.has_scrolled && state.prerequisites_met() {
                LoadingState {
                    initialized: true,
                    ..state
                }
                .advance(Milestone::Initialized)
                .with_message(Milestone::Initialized.message())
            } else {
                state.advance(Milestone::BodyItemsRendered)
            }
        }

        ActionKind::BodyRefInit { ready } => LoadingState {
            refs_ready: *ready,
            ..state
        }
        .advance(Milestone::BodyRefInit),

        ActionKind::BodyResize { .. } => LoadingState {
            has_resized: true,
            ..state
        }
        .advance(Milestone::BodyResize),

        ActionKind::BodyScrollInit => LoadingState {
            has_scrolled: true,
            ..state
        }
        .advance(Milestone::BodyScrollInit),

        _ => state,
    }
}

impl LoadingState {
    fn with_message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }
}
