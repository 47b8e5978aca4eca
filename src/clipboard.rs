//! Clipboard access for copied byte ranges.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("failed to set clipboard text: {0}")]
    Write(#[source] arboard::Error),
}

/// Destination of `CopyToClipboard` effects.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
        Ok(Self { clipboard })
    }
}

impl ClipboardSink for ClipboardHandler {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(ClipboardError::Write)
    }
}

/// In-memory clipboard, used when no system clipboard is reachable.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
