//! crossterm events -> frontend-neutral `core::event` types.

use crossterm::event as ct;

use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

pub fn into_input_event(event: ct::Event) -> InputEvent {
    match event {
        ct::Event::Key(key) => InputEvent::Key(into_key_event(key)),
        ct::Event::Mouse(mouse) => InputEvent::Mouse(into_mouse_event(mouse)),
        ct::Event::Resize(w, h) => InputEvent::Resize(w, h),
        ct::Event::FocusGained => InputEvent::FocusGained,
        ct::Event::FocusLost => InputEvent::FocusLost,
        ct::Event::Paste(text) => InputEvent::Paste(text),
    }
}

pub fn into_key_event(event: ct::KeyEvent) -> KeyEvent {
    let mut modifiers = into_key_modifiers(event.modifiers);
    let code = match event.code {
        ct::KeyCode::Char(ch) => KeyCode::Char(ch),
        ct::KeyCode::Enter => KeyCode::Enter,
        ct::KeyCode::Tab => KeyCode::Tab,
        ct::KeyCode::BackTab => KeyCode::BackTab,
        ct::KeyCode::Esc => KeyCode::Esc,
        ct::KeyCode::Backspace => KeyCode::Backspace,
        ct::KeyCode::Delete => KeyCode::Delete,
        ct::KeyCode::Up => KeyCode::Up,
        ct::KeyCode::Down => KeyCode::Down,
        ct::KeyCode::Left => KeyCode::Left,
        ct::KeyCode::Right => KeyCode::Right,
        ct::KeyCode::Home => KeyCode::Home,
        ct::KeyCode::End => KeyCode::End,
        ct::KeyCode::PageUp => KeyCode::PageUp,
        ct::KeyCode::PageDown => KeyCode::PageDown,
        ct::KeyCode::F(n) => KeyCode::F(n),
        // Some terminals report Ctrl+Space as NUL.
        ct::KeyCode::Null => {
            modifiers |= KeyModifiers::CONTROL;
            KeyCode::Char(' ')
        }
        _ => KeyCode::Unknown,
    };
    let kind = match event.kind {
        ct::KeyEventKind::Press => KeyEventKind::Press,
        ct::KeyEventKind::Repeat => KeyEventKind::Repeat,
        ct::KeyEventKind::Release => KeyEventKind::Release,
    };
    KeyEvent {
        code,
        modifiers,
        kind,
    }
}

fn into_key_modifiers(mods: ct::KeyModifiers) -> KeyModifiers {
    [
        (ct::KeyModifiers::SHIFT, KeyModifiers::SHIFT),
        (ct::KeyModifiers::CONTROL, KeyModifiers::CONTROL),
        (ct::KeyModifiers::ALT, KeyModifiers::ALT),
        (ct::KeyModifiers::SUPER, KeyModifiers::SUPER),
    ]
    .into_iter()
    .filter(|(from, _)| mods.contains(*from))
    .fold(KeyModifiers::NONE, |acc, (_, to)| acc | to)
}

pub fn into_mouse_event(event: ct::MouseEvent) -> MouseEvent {
    let button = |b: ct::MouseButton| match b {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Right => MouseButton::Right,
        ct::MouseButton::Middle => MouseButton::Middle,
    };
    let kind = match event.kind {
        ct::MouseEventKind::Down(b) => MouseEventKind::Down(button(b)),
        ct::MouseEventKind::Up(b) => MouseEventKind::Up(button(b)),
        ct::MouseEventKind::Drag(b) => MouseEventKind::Drag(button(b)),
        ct::MouseEventKind::Moved => MouseEventKind::Moved,
        ct::MouseEventKind::ScrollUp => MouseEventKind::ScrollUp,
        ct::MouseEventKind::ScrollDown => MouseEventKind::ScrollDown,
        ct::MouseEventKind::ScrollLeft => MouseEventKind::ScrollLeft,
        ct::MouseEventKind::ScrollRight => MouseEventKind::ScrollRight,
    };
    MouseEvent {
        kind,
        column: event.column,
        row: event.row,
        modifiers: into_key_modifiers(event.modifiers),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
