mod common;

use common::booted_viewer;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use hexlens::viewer::{dispatch, CellClass, RenderEffect};

#[test]
fn enter_then_leave_issues_two_effects() {
    let mut viewer = booted_viewer(256, 8);
    assert_eq!(viewer.store().hover.index, None);

    let entered = viewer.dispatch(dispatch::cell_mouse_enter(5));
    assert_eq!(viewer.store().hover.index, Some(5));

    let left = viewer.dispatch(dispatch::body_mouse_leave());
    assert_eq!(viewer.store().hover.index, None);

    assert_eq!(
        entered,
        vec![RenderEffect::AddClass {
            index: 5,
            class: CellClass::Hover
        }]
    );
    assert_eq!(
        left,
        vec![RenderEffect::RemoveClass {
            index: 5,
            class: CellClass::Hover
        }]
    );
}

#[test]
fn hover_moves_between_cells() {
    let mut viewer = booted_viewer(256, 8);
    viewer.dispatch(dispatch::cell_mouse_enter(5));
    let effects = viewer.dispatch(dispatch::cell_mouse_enter(6));
    assert_eq!(
        effects,
        vec![
            RenderEffect::RemoveClass {
                index: 5,
                class: CellClass::Hover
            },
            RenderEffect::AddClass {
                index: 6,
                class: CellClass::Hover
            },
        ]
    );
}

#[test]
fn entering_past_the_document_is_ignored() {
    let mut viewer = booted_viewer(64, 8);
    let effects = viewer.dispatch(dispatch::cell_mouse_enter(64));
    assert!(effects.is_empty());
    assert_eq!(viewer.store().hover.index, None);
}

#[test]
fn hover_is_frozen_while_dragging() {
    let mut viewer = booted_viewer(256, 8);
    viewer.dispatch(dispatch::cell_mouse_enter(2));
    viewer.dispatch(dispatch::cell_mouse_down(2, MouseButton::Left, false).unwrap());
    viewer.dispatch(dispatch::cell_mouse_enter(9));
    assert_eq!(viewer.store().hover.index, Some(2));
    assert_eq!(viewer.store().cell.mouse_enter_index, Some(9));
}

#[test]
fn hover_on_dead_rows_updates_state_without_effects() {
    let mut viewer = booted_viewer(4096, 8);
    // rows 0..8 visible plus two rows of overscan: cells 0..160 are live
    let effects = viewer.dispatch(dispatch::cell_mouse_enter(2000));
    assert_eq!(viewer.store().hover.index, Some(2000));
    assert!(effects.is_empty());
}

#[test]
fn terminal_mouse_motion_translates_to_hover() {
    let mut viewer = booted_viewer(256, 8);
    let moved = MouseEvent {
        kind: MouseEventKind::Moved,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    let action = dispatch::mouse_event(viewer.store(), &moved, Some(7)).unwrap();
    viewer.dispatch(action);
    assert_eq!(viewer.store().hover.index, Some(7));

    let action = dispatch::mouse_event(viewer.store(), &moved, None).unwrap();
    viewer.dispatch(action);
    assert_eq!(viewer.store().hover.index, None);
}

#[test]
fn entering_past_the_end_clears_hover() {
    // 40 bytes leave eight empty cells in the last 16-byte row.
    let mut viewer = booted_viewer(40, 8);
    viewer.dispatch(dispatch::cell_mouse_enter(39));
    assert_eq!(viewer.store().hover.index, Some(39));

    let effects = viewer.dispatch(dispatch::cell_mouse_enter(44));
    assert_eq!(viewer.store().hover.index, None);
    assert!(effects.contains(&RenderEffect::RemoveClass {
        index: 39,
        class: CellClass::Hover
    }));
}
