//! Mapping from terminal events to state machine events.

use crate::types::{Event, PointerButton};
use crossterm::event::{
    Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Map any terminal event. Unrecognized input yields `None`.
pub fn map_event(event: &TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) => map_key_event(*key),
        TermEvent::Mouse(mouse) => map_mouse_event(*mouse),
        TermEvent::Resize(cols, rows) => Some(Event::Resize {
            height: *rows,
            width: *cols,
        }),
        _ => None,
    }
}

/// Map a key press. Releases are ignored; auto-repeat counts as a press.
pub fn map_key_event(key: KeyEvent) -> Option<Event> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    key_name(key).and_then(Event::from_key_name)
}

/// Textual name of a key, as understood by [`Event::from_key_name`].
pub fn key_name(key: KeyEvent) -> Option<&'static str> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some("ctrl+c"),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some("up"),
        KeyCode::Down => Some("down"),
        KeyCode::Left => Some("left"),
        KeyCode::Right => Some("right"),
        KeyCode::Char(c) => match c {
            'q' => Some("q"),
            '?' => Some("?"),
            'p' => Some("p"),
            'w' => Some("w"),
            'a' => Some("a"),
            's' => Some("s"),
            'd' => Some("d"),
            'h' => Some("h"),
            'j' => Some("j"),
            'k' => Some("k"),
            'l' => Some("l"),
            't' => Some("t"),
            ' ' => Some(" "),
            _ => None,
        },
        _ => None,
    }
}

/// Map a mouse press or drag to a pointer event.
///
/// Drags with a button held paint just like presses.
pub fn map_mouse_event(mouse: MouseEvent) -> Option<Event> {
    let button = match mouse.kind {
        MouseEventKind::Down(button) | MouseEventKind::Drag(button) => button,
        _ => return None,
    };
    let button = match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Other,
    };
    Some(Event::Pointer {
        x: mouse.column as i32,
        y: mouse.row as i32,
        button,
    })
}
