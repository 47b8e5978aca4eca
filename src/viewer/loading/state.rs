//! State for the loading milestones.

use serde::Serialize;

use crate::viewer::mvi::UiState;

/// Startup milestones with their progress share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    AppLoad,
    SettingLoad,
    AppLocationInit,
    BodyInit,
    BodyItemsRendered,
    BodyRefInit,
    BodyResize,
    BodyScrollInit,
    Initialized,
}

impl Milestone {
    /// Progress in percent, in eighths of the whole.
    pub fn progress(self) -> f64 {
        let eighths = match self {
            Self::AppLoad => 1.0,
            Self::SettingLoad | Self::BodyInit => 2.0,
            Self::AppLocationInit => 3.0,
            Self::BodyItemsRendered => 4.0,
            Self::BodyRefInit => 5.0,
            Self::BodyResize => 6.0,
            Self::BodyScrollInit => 7.0,
            Self::Initialized => 8.0,
        };
        100.0 * eighths / 8.0
    }

    /// Message key shown under the progress bar.
    pub fn message(self) -> &'static str {
        match self {
            Self::AppLoad => "loading.appLoad",
            Self::SettingLoad => "loading.settingLoad",
            Self::AppLocationInit => "loading.appLocationInit",
            Self::BodyInit => "loading.bodyInit",
            Self::BodyItemsRendered => "loading.bodyItemsRendered",
            Self::BodyRefInit => "loading.bodyRefInit",
            Self::BodyResize => "loading.bodyResize",
            Self::BodyScrollInit => "loading.bodyScrollInit",
            Self::Initialized => "loading.initialized",
        }
    }
}

pub const INVALID_DATA_MESSAGE: &str = "loading.invalidData";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadingState {
    /// 0..=100, never decreasing within one viewer instance.
    pub progress: f64,
    pub is_invalid_data: bool,
    pub refs_ready: bool,
    pub has_resized: bool,
    pub has_scrolled: bool,
    pub has_loaded_settings: bool,
    /// Sticky once set.
    pub initialized: bool,
    pub error: bool,
    pub message: String,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            is_invalid_data: false,
            refs_ready: false,
            has_resized: false,
            has_scrolled: false,
            has_loaded_settings: false,
            initialized: false,
            error: false,
            message: "loading.initialization".to_string(),
        }
    }
}

impl UiState for LoadingState {}

impl LoadingState {
    /// Fully initialized terminal state.
    pub fn ready() -> Self {
        Self {
            progress: 100.0,
            is_invalid_data: false,
            refs_ready: true,
            has_resized: true,
            has_scrolled: true,
            has_loaded_settings: true,
            initialized: true,
            error: false,
            message: String::new(),
        }
    }

    /// All prerequisites of the initialized state hold.
    pub fn prerequisites_met(&self) -> bool {
        self.refs_ready && self.has_resized && self.has_scrolled && self.has_loaded_settings
    }

    /// Progress is halted by invalid input.
    pub fn is_halted(&self) -> bool {
        self.is_invalid_data
    }

    pub(crate) fn advance(mut self, milestone: Milestone) -> Self {
        self.progress = self.progress.max(milestone.progress());
        if !self.initialized {
            self.message = milestone.message().to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_initialized() {
        let state = LoadingState::default();
        assert_eq!(state.progress, 0.0);
        assert!(!state.initialized);
        assert!(!state.prerequisites_met());
    }

    #[test]
    fn ready_meets_prerequisites() {
        let state = LoadingState::ready();
        assert!(state.prerequisites_met());
        assert!(state.initialized);
        assert_eq!(state.progress, 100.0);
    }

    #[test]
    fn advance_never_lowers_progress() {
        let state = LoadingState::default()
            .advance(Milestone::AppLocationInit)
            .advance(Milestone::BodyInit);
        assert_eq!(state.progress, 37.5);
        assert_eq!(state.message, "loading.bodyInit");
    }
}
