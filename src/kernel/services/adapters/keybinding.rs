//! 快捷键：按键 → 命令（支持上下文）

use rustc_hash::FxHashMap;

use crate::core::event::{Key, KeyCode};
use crate::core::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Tree,
    Panel,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "global" => Some(Self::Global),
            "tree" | "project" | "projecttree" | "project.tree" => Some(Self::Tree),
            "panel" | "properties" | "propertiespanel" => Some(Self::Panel),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    tree: FxHashMap<Key, Command>,
    panel: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self {
            global: default_global_keybindings(),
            tree: default_tree_keybindings(),
            panel: default_panel_keybindings(),
        }
    }

    /// Context map first, then the global map.
    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Tree => self.tree.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::Panel => self.panel.get(key).or_else(|| self.global.get(key)),
        }
        .copied()
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Tree => &self.tree,
            KeybindingContext::Panel => &self.panel,
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Tree => &mut self.tree,
            KeybindingContext::Panel => &mut self.panel,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();

    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('n')), Command::AddFolder);
    bindings.insert(Key::ctrl(KeyCode::Char('r')), Command::AddRootFolder);
    bindings.insert(Key::ctrl(KeyCode::Char('w')), Command::ClosePanel);
    bindings.insert(Key::simple(KeyCode::Tab), Command::ToggleFocus);
    bindings.insert(Key::shift(KeyCode::BackTab), Command::ToggleFocus);
    bindings.insert(Key::simple(KeyCode::BackTab), Command::ToggleFocus);

    bindings
}

fn default_tree_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();

    bindings.insert(Key::simple(KeyCode::Up), Command::TreeUp);
    bindings.insert(Key::simple(KeyCode::Char('k')), Command::TreeUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::TreeDown);
    bindings.insert(Key::simple(KeyCode::Char('j')), Command::TreeDown);
    bindings.insert(Key::simple(KeyCode::Left), Command::TreeCollapse);
    bindings.insert(Key::simple(KeyCode::Char('h')), Command::TreeCollapse);
    bindings.insert(Key::simple(KeyCode::Right), Command::TreeExpand);
    bindings.insert(Key::simple(KeyCode::Char('l')), Command::TreeExpand);
    bindings.insert(Key::simple(KeyCode::Enter), Command::TreeToggle);
    bindings.insert(Key::simple(KeyCode::Char(' ')), Command::TreeToggle);
    bindings.insert(Key::simple(KeyCode::Char('a')), Command::AddFolder);
    bindings.insert(Key::shift(KeyCode::Char('a')), Command::AddRootFolder);
    bindings.insert(Key::simple(KeyCode::Char('q')), Command::Quit);

    bindings
}

fn default_panel_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();

    bindings.insert(Key::simple(KeyCode::Up), Command::PanelUp);
    bindings.insert(Key::simple(KeyCode::Char('k')), Command::PanelUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::PanelDown);
    bindings.insert(Key::simple(KeyCode::Char('j')), Command::PanelDown);
    bindings.insert(Key::simple(KeyCode::Enter), Command::PanelActivate);
    bindings.insert(Key::simple(KeyCode::Char(' ')), Command::PanelActivate);
    bindings.insert(Key::simple(KeyCode::Esc), Command::FocusTree);

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
