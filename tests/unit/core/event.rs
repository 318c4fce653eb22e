use super::*;

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn test_key_from_event_folds_uppercase_into_shift() {
    let event = KeyEvent::press(KeyCode::Char('A'), KeyModifiers::NONE);
    let key: Key = event.into();
    assert_eq!(key, Key::shift(KeyCode::Char('a')));
}

#[test]
fn test_key_from_event_keeps_non_letters() {
    let event = KeyEvent::press(KeyCode::Enter, KeyModifiers::NONE);
    let key: Key = event.into();
    assert_eq!(key, Key::simple(KeyCode::Enter));
}

#[test]
fn test_modifiers_combine() {
    let mut mods = KeyModifiers::CONTROL;
    mods |= KeyModifiers::SHIFT;
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(mods.contains(KeyModifiers::SHIFT));
    assert!(!mods.contains(KeyModifiers::ALT));
    assert_eq!(mods, KeyModifiers::SHIFT | KeyModifiers::CONTROL);
    assert!(KeyModifiers::NONE.is_empty());
}

#[test]
fn test_input_event_as_key() {
    let input = InputEvent::Key(KeyEvent::press(KeyCode::Esc, KeyModifiers::NONE));
    assert!(input.is_key());
    assert_eq!(input.as_key().map(|k| k.code), Some(KeyCode::Esc));
    assert!(InputEvent::Resize(80, 24).as_key().is_none());
}
