//! Viewer configuration: types, TOML loading and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, CopyConfig, CopyMode, HistoryConfig, InputConfig, LayoutConfig, OffsetConfig,
    SearchConfig, SearchMode,
};
