use super::*;

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = ct::KeyEvent::new(ct::KeyCode::Null, ct::KeyModifiers::NONE);
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn modifiers_are_combined() {
    let event = ct::KeyEvent::new(
        ct::KeyCode::Char('r'),
        ct::KeyModifiers::CONTROL | ct::KeyModifiers::SHIFT,
    );
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char('r'));
    assert_eq!(converted.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    assert_eq!(converted.kind, KeyEventKind::Press);
}

#[test]
fn unsupported_keys_map_to_unknown() {
    let event = ct::KeyEvent::new(ct::KeyCode::CapsLock, ct::KeyModifiers::NONE);
    assert_eq!(into_key_event(event).code, KeyCode::Unknown);
}

#[test]
fn mouse_click_keeps_position() {
    let event = ct::MouseEvent {
        kind: ct::MouseEventKind::Down(ct::MouseButton::Left),
        column: 4,
        row: 7,
        modifiers: ct::KeyModifiers::NONE,
    };
    let converted = into_input_event(ct::Event::Mouse(event));
    assert_eq!(
        converted,
        InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        })
    );
}

#[test]
fn resize_passes_through() {
    assert_eq!(
        into_input_event(ct::Event::Resize(80, 24)),
        InputEvent::Resize(80, 24)
    );
}
