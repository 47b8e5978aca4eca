mod common;

use common::{booted_viewer, ctrl_key, key, ROW_HEIGHT_PX};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton};
use hexlens::clipboard::MemoryClipboard;
use hexlens::config::CopyMode;
use hexlens::hex::HexDocument;
use hexlens::viewer::{apply_effects, dispatch, Focus, RenderEffect, Settings, Viewer};

fn select(viewer: &mut Viewer, start: usize, end: usize) {
    viewer.dispatch(dispatch::cell_mouse_down(start, MouseButton::Left, false).unwrap());
    viewer.dispatch(dispatch::cell_mouse_enter(end));
    viewer.dispatch(dispatch::body_mouse_up(viewer.store(), MouseButton::Left).unwrap());
}

fn copy(viewer: &mut Viewer) -> Vec<RenderEffect> {
    let action = dispatch::copy_key_down(viewer.store(), &ctrl_key(KeyCode::Char('c'))).unwrap();
    viewer.dispatch(action)
}

#[test]
fn copies_selection_as_hex() {
    let mut viewer = booted_viewer(256, 8);
    select(&mut viewer, 0x4d, 0x4f);
    let effects = copy(&mut viewer);
    assert_eq!(
        effects,
        vec![RenderEffect::CopyToClipboard {
            text: "4D 4E 4F".to_string()
        }]
    );
}

#[test]
fn copies_cursor_cell_without_selection() {
    let mut viewer = booted_viewer(256, 8);
    let action = dispatch::body_key_down(viewer.store(), &key(KeyCode::Right)).unwrap();
    viewer.dispatch(action);
    copy(&mut viewer);
    assert_eq!(viewer.store().copy.text.as_deref(), Some("01"));
}

#[test]
fn text_mode_copies_decoded_bytes() {
    let settings = Settings {
        copy_mode: CopyMode::Text,
        columns: Some(16),
        ..Settings::default()
    };
    let mut viewer = Viewer::new(HexDocument::from_bytes(b"hello world".to_vec()), settings);
    viewer.boot(None, None, Some(8 * ROW_HEIGHT_PX));
    viewer.dispatch(dispatch::focus(Focus::Body));
    select(&mut viewer, 6, 10);
    copy(&mut viewer);
    assert_eq!(viewer.store().copy.text.as_deref(), Some("world"));
}

#[test]
fn nothing_to_copy_emits_nothing() {
    let mut viewer = booted_viewer(256, 8);
    assert!(copy(&mut viewer).is_empty());
    assert_eq!(viewer.store().copy.sequence, 0);
}

#[test]
fn repeated_copy_is_observed_each_time() {
    let mut viewer = booted_viewer(256, 8);
    select(&mut viewer, 1, 2);
    assert_eq!(copy(&mut viewer).len(), 1);
    assert_eq!(copy(&mut viewer).len(), 1);
    assert_eq!(viewer.store().copy.sequence, 2);
}

#[test]
fn copy_guard_requires_focus_and_modifier() {
    let mut viewer = booted_viewer(256, 8);
    assert!(dispatch::copy_key_down(viewer.store(), &key(KeyCode::Char('c'))).is_none());

    let cmd_c = crossterm::event::KeyEvent::new(KeyCode::Char('c'), KeyModifiers::SUPER);
    assert!(dispatch::copy_key_down(viewer.store(), &cmd_c).is_some());

    viewer.dispatch(dispatch::focus(Focus::Search));
    assert!(dispatch::copy_key_down(viewer.store(), &ctrl_key(KeyCode::Char('c'))).is_none());
}

#[test]
fn copy_is_tracked_in_history() {
    let mut viewer = booted_viewer(256, 8);
    select(&mut viewer, 0, 3);
    copy(&mut viewer);
    copy(&mut viewer);

    let names: Vec<&str> = viewer.history().entries().map(|e| e.action).collect();
    assert_eq!(names, vec!["copyKeyDown", "copyKeyDown"]);
}

#[test]
fn effects_reach_the_clipboard() {
    let mut viewer = booted_viewer(256, 8);
    select(&mut viewer, 0x41, 0x43);
    let effects = copy(&mut viewer);

    let mut clipboard = MemoryClipboard::default();
    let mut view: Vec<RenderEffect> = Vec::new();
    apply_effects(&effects, &mut view, &mut clipboard).unwrap();
    assert_eq!(clipboard.contents(), Some("41 42 43"));
    assert!(view.is_empty());
}
