//! State for byte-pattern search.

use serde::Serialize;

use crate::config::SearchMode;
use crate::hex::{is_valid_hex_string, parse_hex_string, HexDocument};
use crate::viewer::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    pub input_value: Option<String>,
    /// Start offsets of every match, ascending.
    pub results: Vec<usize>,
    /// Index into `results`; `None` whenever `results` is empty.
    pub selected_result: Option<usize>,
    /// Length in bytes of the searched pattern.
    pub pattern_len: usize,
}

impl UiState for SearchState {}

impl SearchState {
    /// Fresh state for `input` searched in `document`.
    pub fn for_input(input: &str, mode: SearchMode, document: &HexDocument) -> Self {
        let pattern = search_pattern(input, mode).unwrap_or_default();
        let results = document.find_all(&pattern);
        Self {
            input_value: Some(input.to_string()),
            selected_result: if results.is_empty() { None } else { Some(0) },
            results,
            pattern_len: pattern.len(),
        }
    }

    /// Offset of the selected match.
    pub fn selected_offset(&self) -> Option<usize> {
        self.selected_result
            .and_then(|index| self.results.get(index).copied())
    }

    /// Inclusive byte range of the selected match.
    pub fn selected_range(&self) -> Option<(usize, usize)> {
        let start = self.selected_offset()?;
        Some((start, start + self.pattern_len.max(1) - 1))
    }

    pub fn match_count(&self) -> usize {
        self.results.len()
    }
}

/// Bytes to search for, or `None` when the input yields no pattern.
///
/// In `Auto` mode, whole-byte hex text is a byte pattern and anything else
/// is searched as UTF-8 text.
pub fn search_pattern(input: &str, mode: SearchMode) -> Option<Vec<u8>> {
    if input.trim().is_empty() {
        return None;
    }
    match mode {
        SearchMode::Hex => parse_hex_string(input).ok(),
        SearchMode::Text => Some(input.as_bytes().to_vec()),
        SearchMode::Auto => {
            let hex = is_valid_hex_string(input)
                .then(|| parse_hex_string(input).ok())
                .flatten();
            Some(hex.unwrap_or_else(|| input.as_bytes().to_vec()))
        }
    }
}
