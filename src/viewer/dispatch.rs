//! Action builders: guards, validation and input translation.
//!
//! Guards run here, before dispatch, so a disallowed input never reaches the
//! reducer chain. A failed guard returns `None` and nothing else happens.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::geometry::ScrollPolicy;
use crate::viewer::action::{Action, ActionKind, CursorKey, ItemsRendered, SearchStep};
use crate::viewer::store::{Focus, Store};

/// Container size assumed when the measurement is missing.
pub const DEFAULT_BODY_SIZE: u32 = 1000;

pub fn body_init(initialized: bool) -> Action {
    Action::new(ActionKind::BodyInit { initialized })
}

pub fn body_ref_init(ready: bool) -> Action {
    Action::new(ActionKind::BodyRefInit { ready })
}

pub fn body_scroll_init() -> Action {
    Action::new(ActionKind::BodyScrollInit)
}

pub fn body_resize(width: Option<u32>, height: Option<u32>) -> Action {
    Action::new(ActionKind::BodyResize {
        width: width.unwrap_or(DEFAULT_BODY_SIZE),
        height: height.unwrap_or(DEFAULT_BODY_SIZE),
    })
    .repeating()
}

pub fn body_mouse_leave() -> Action {
    Action::new(ActionKind::BodyMouseLeave)
}

pub fn body_scroll_wheel(delta_y: i32) -> Option<Action> {
    (delta_y != 0).then(|| Action::new(ActionKind::BodyScrollWheel { delta_y }).repeating())
}

pub fn body_items_rendered(event: ItemsRendered) -> Action {
    Action::new(ActionKind::BodyItemsRendered(event))
}

pub fn body_mouse_up(store: &Store, button: MouseButton) -> Option<Action> {
    if !store.is_body_focused() || button != MouseButton::Left {
        return None;
    }
    Some(Action::new(ActionKind::BodyMouseUp))
}

pub fn focus(focus: Focus) -> Action {
    Action::new(ActionKind::FocusChange { focus })
}

pub fn cell_mouse_enter(index: usize) -> Action {
    Action::new(ActionKind::CellMouseEnter { index })
}

pub fn cell_mouse_down(index: usize, button: MouseButton, shift: bool) -> Option<Action> {
    (button == MouseButton::Left).then(|| Action::new(ActionKind::CellMouseDown { index, shift }))
}

/// Cursor key for `key`, ignoring modifiers.
pub fn cursor_key(key: &KeyEvent) -> Option<CursorKey> {
    match key.code {
        KeyCode::Left => Some(CursorKey::Left),
        KeyCode::Right => Some(CursorKey::Right),
        KeyCode::Up => Some(CursorKey::Up),
        KeyCode::Down => Some(CursorKey::Down),
        KeyCode::PageUp => Some(CursorKey::PageUp),
        KeyCode::PageDown => Some(CursorKey::PageDown),
        KeyCode::Home => Some(CursorKey::Home),
        KeyCode::End => Some(CursorKey::End),
        _ => None,
    }
}

pub fn is_arrow_key(key: &KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down
    )
}

pub fn is_home_end_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Home | KeyCode::End)
}

pub fn is_page_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::PageUp | KeyCode::PageDown)
}

/// Ctrl+C, or Cmd+C on macOS terminals that report the super modifier.
pub fn is_copy_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'c'))
        && (key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(KeyModifiers::SUPER))
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

pub fn cursor_key_down(store: &Store, key: &KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release || !store.is_body_focused() {
        return None;
    }
    if !(is_arrow_key(key) || is_home_end_key(key) || is_page_key(key)) {
        return None;
    }
    Some(Action::new(ActionKind::CursorKeyDown {
        key: cursor_key(key)?,
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
    }))
}

/// Copy is one history entry and never coalesced.
pub fn copy_key_down(store: &Store, key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press || !store.is_body_focused() || !is_copy_key(key) {
        return None;
    }
    Some(Action::new(ActionKind::CopyKeyDown).tracked())
}

/// Route a key press on the body to cursor navigation or copy.
pub fn body_key_down(store: &Store, key: &KeyEvent) -> Option<Action> {
    cursor_key_down(store, key).or_else(|| copy_key_down(store, key))
}

/// Translate a terminal mouse event.
///
/// `cell` is the byte index under the pointer, as hit-tested by the view.
pub fn mouse_event(store: &Store, event: &MouseEvent, cell: Option<usize>) -> Option<Action> {
    let shift = event.modifiers.contains(KeyModifiers::SHIFT);
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => match cell {
            Some(index) => Some(cell_mouse_enter(index)),
            None => Some(body_mouse_leave()),
        },
        MouseEventKind::Down(button) => cell_mouse_down(cell?, button, shift),
        MouseEventKind::Up(button) => body_mouse_up(store, button),
        MouseEventKind::ScrollDown => body_scroll_wheel(1),
        MouseEventKind::ScrollUp => body_scroll_wheel(-1),
        _ => None,
    }
}

pub fn search_change(input: impl Into<String>) -> Action {
    Action::new(ActionKind::SearchChange {
        input: input.into(),
    })
}

/// Navigation needs a selected result.
pub fn search_navigate(store: &Store, step: SearchStep) -> Option<Action> {
    store.search.selected_result?;
    Some(Action::new(ActionKind::SearchNavigate { step }))
}

/// Clearing needs something to clear.
pub fn search_clear(store: &Store) -> Option<Action> {
    let has_input = store
        .search
        .input_value
        .as_deref()
        .is_some_and(|input| !input.is_empty());
    has_input.then(|| Action::new(ActionKind::SearchClear))
}

pub fn scroll_to_index(index: i64, policy: ScrollPolicy) -> Option<Action> {
    (index >= 0).then(|| Action::new(ActionKind::ScrollToIndex { index, policy }))
}

/// Scroll to a user-typed offset; malformed text yields no action.
pub fn scroll_to_offset(text: &str, default_base: u32, policy: ScrollPolicy) -> Option<Action> {
    let offset = parse_offset(text, default_base)?;
    scroll_to_index(i64::try_from(offset).ok()?, policy)
}

/// Parse an address such as `0x1F0`, `0o17`, `0b101` or bare digits in
/// `default_base`.
pub fn parse_offset(text: &str, default_base: u32) -> Option<usize> {
    let text = text.trim();
    let lower = text.to_ascii_lowercase();
    let (digits, base) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else {
        (lower.as_str(), default_base)
    };
    if digits.is_empty() || !(2..=36).contains(&base) {
        return None;
    }
    usize::from_str_radix(digits, base).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_offset_handles_prefixes() {
        assert_eq!(parse_offset("0x1F0", 10), Some(0x1f0));
        assert_eq!(parse_offset("0o17", 16), Some(15));
        assert_eq!(parse_offset("0b101", 16), Some(5));
        assert_eq!(parse_offset("1F0", 16), Some(0x1f0));
        assert_eq!(parse_offset(" 496 ", 10), Some(496));
    }

    #[test]
    fn parse_offset_rejects_garbage() {
        assert_eq!(parse_offset("", 16), None);
        assert_eq!(parse_offset("0x", 16), None);
        assert_eq!(parse_offset("12G", 16), None);
        assert_eq!(parse_offset("-4", 10), None);
        assert_eq!(parse_offset("9", 8), None);
    }

    #[test]
    fn zero_wheel_delta_is_dropped() {
        assert!(body_scroll_wheel(0).is_none());
        assert!(body_scroll_wheel(3).is_some_and(|a| a.repeat && !a.tracked));
    }

    #[test]
    fn resize_defaults_missing_dimensions() {
        let action = body_resize(None, Some(200));
        assert_eq!(
            action.kind,
            ActionKind::BodyResize {
                width: DEFAULT_BODY_SIZE,
                height: 200
            }
        );
        assert!(action.repeat);
    }
}
