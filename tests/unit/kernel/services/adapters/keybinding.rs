use super::*;
use crate::core::event::KeyModifiers;

#[test]
fn tree_has_navigation_bindings() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Tree, &Key::simple(KeyCode::Down)),
        Some(Command::TreeDown)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Tree, &Key::simple(KeyCode::Char('k'))),
        Some(Command::TreeUp)
    );
}

#[test]
fn global_commands_fall_through_in_tree_and_panel() {
    let service = KeybindingService::new();
    for context in [KeybindingContext::Tree, KeybindingContext::Panel] {
        assert_eq!(
            service.resolve(context, &Key::ctrl(KeyCode::Char('q'))),
            Some(Command::Quit)
        );
        assert_eq!(
            service.resolve(context, &Key::simple(KeyCode::Tab)),
            Some(Command::ToggleFocus)
        );
    }
}

#[test]
fn project_commands_are_bound() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(KeybindingContext::Tree, &Key::simple(KeyCode::Char('a'))),
        Some(Command::AddFolder)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Tree, &Key::shift(KeyCode::Char('a'))),
        Some(Command::AddRootFolder)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Global, &Key::ctrl(KeyCode::Char('r'))),
        Some(Command::AddRootFolder)
    );
}

#[test]
fn uppercase_key_events_match_shift_bindings() {
    let service = KeybindingService::new();
    let key = Key::from(crate::core::KeyEvent::press(
        KeyCode::Char('A'),
        KeyModifiers::SHIFT,
    ));
    assert_eq!(
        service.resolve(KeybindingContext::Tree, &key),
        Some(Command::AddRootFolder)
    );
}

#[test]
fn enter_means_different_things_per_context() {
    let service = KeybindingService::new();
    let enter = Key::simple(KeyCode::Enter);
    assert_eq!(
        service.resolve(KeybindingContext::Tree, &enter),
        Some(Command::TreeToggle)
    );
    assert_eq!(
        service.resolve(KeybindingContext::Panel, &enter),
        Some(Command::PanelActivate)
    );
    assert_eq!(service.resolve(KeybindingContext::Global, &enter), None);
}

#[test]
fn bind_and_unbind_override_defaults() {
    let mut service = KeybindingService::new();
    let key = Key::simple(KeyCode::F(5));

    service.bind(KeybindingContext::Tree, key, Command::AddFolder);
    assert_eq!(
        service.resolve(KeybindingContext::Tree, &key),
        Some(Command::AddFolder)
    );

    assert_eq!(
        service.unbind(KeybindingContext::Tree, &key),
        Some(Command::AddFolder)
    );
    assert_eq!(service.resolve(KeybindingContext::Tree, &key), None);
}

#[test]
fn context_names_parse() {
    assert_eq!(KeybindingContext::parse("Tree"), Some(KeybindingContext::Tree));
    assert_eq!(
        KeybindingContext::parse(" properties "),
        Some(KeybindingContext::Panel)
    );
    assert_eq!(KeybindingContext::parse("editor"), None);
}
