//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hexlens::hex::HexDocument;
use hexlens::viewer::{dispatch, CellClass, Focus, RenderEffect, Settings, Viewer};
use std::path::PathBuf;
use tempfile::TempDir;

/// Row height used by the default settings, in pixels.
pub const ROW_HEIGHT_PX: u32 = 20;

/// `len` bytes counting up from zero, wrapping at 256.
pub fn sequential_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 256) as u8).collect()
}

/// Default settings with a fixed 16-byte row.
pub fn sixteen_columns() -> Settings {
    Settings {
        columns: Some(16),
        ..Settings::default()
    }
}

/// Viewer over `bytes`, not yet booted.
pub fn viewer_for(bytes: Vec<u8>) -> Viewer {
    Viewer::new(HexDocument::from_bytes(bytes), sixteen_columns())
}

/// Viewer over `len` sequential bytes, booted at 16 columns by `rows` rows
/// with keyboard focus on the grid.
pub fn booted_viewer(len: usize, rows: u32) -> Viewer {
    let mut viewer = viewer_for(sequential_bytes(len));
    viewer.boot(None, None, Some(rows * ROW_HEIGHT_PX));
    viewer.dispatch(dispatch::focus(Focus::Body));
    viewer
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn shift_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::SHIFT)
}

pub fn ctrl_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::CONTROL)
}

/// Indices that received `class`.
pub fn added(effects: &[RenderEffect], class: CellClass) -> Vec<usize> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            RenderEffect::AddClass { index, class: c } if *c == class => Some(*index),
            _ => None,
        })
        .collect()
}

/// Indices that lost `class`.
pub fn removed(effects: &[RenderEffect], class: CellClass) -> Vec<usize> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            RenderEffect::RemoveClass { index, class: c } if *c == class => Some(*index),
            _ => None,
        })
        .collect()
}

/// Write `content` to a `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Write `bytes` to a file in a fresh temp dir.
pub fn temp_file(name: &str, bytes: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, bytes).expect("Failed to write file");
    (temp_dir, path)
}
