use crate::core::Command;
use crate::models::NodeId;

use super::{Action, AppState, Effect, FocusTarget};

mod panel;
mod project;
mod prompts;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::AddFolderTo { parent } => self.start_add_folder(Some(parent)),
            Action::TreeSelect(id) => self.select_node(id),
            Action::TreeClickRow { row } => {
                let Some(id) = self.state.project.row_id(row) else {
                    return DispatchResult::unchanged();
                };
                let focus_changed = self.set_focus(FocusTarget::Tree);
                let mut result = self.select_node(id);
                result.state_changed |= focus_changed;
                result
            }
            Action::TreeExpand(id) => self.expand_node(id),
            Action::TreeCollapse(id) => self.collapse_node(id),
            Action::TreeScroll { delta } => {
                DispatchResult::changed(self.state.project.scroll(delta))
            }
            Action::TreeSetViewHeight { height } => {
                DispatchResult::changed(self.state.project.set_view_height(height))
            }
            Action::PanelMessage(message) => self.reduce_panel_message(message),
            Action::PanelFocusField { index } => {
                let Some(panel) = self.state.panel.as_mut() else {
                    return DispatchResult::unchanged();
                };
                if index >= panel.document().len() {
                    return DispatchResult::unchanged();
                }
                let moved = panel.focus_field(index);
                let focus_changed = self.set_focus(FocusTarget::Panel);
                DispatchResult::changed(moved || focus_changed)
            }
            Action::PanelSetViewHeight { height } => DispatchResult::changed(
                self.state
                    .panel
                    .as_mut()
                    .is_some_and(|panel| panel.set_view_height(height)),
            ),
            Action::PanelDisposed => self.dispose_panel(),
            Action::QuickPickAppend(_)
            | Action::QuickPickBackspace
            | Action::QuickPickMoveSelection(_)
            | Action::QuickPickAccept
            | Action::QuickPickCancel => self.reduce_quick_pick_action(action),
            Action::InputDialogAppend(_)
            | Action::InputDialogBackspace
            | Action::InputDialogCursorLeft
            | Action::InputDialogCursorRight
            | Action::InputDialogAccept
            | Action::InputDialogCancel => self.reduce_input_dialog_action(action),
        }
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        tracing::debug!(command = cmd.name(), "run command");
        match cmd {
            Command::AddFolder => self.start_add_folder(self.state.selected()),
            Command::AddRootFolder => self.start_add_root_folder(),
            Command::TreeUp | Command::TreeDown => {
                let delta = if cmd == Command::TreeUp { -1 } else { 1 };
                match self.state.project.move_selection(delta) {
                    Some(_) => {
                        self.state.ui.status = None;
                        self.refresh_panel();
                        DispatchResult::changed(true)
                    }
                    None => DispatchResult::unchanged(),
                }
            }
            Command::TreeExpand => match self.state.selected() {
                Some(id) => self.expand_node(id),
                None => DispatchResult::unchanged(),
            },
            Command::TreeCollapse => {
                let Some(id) = self.state.selected() else {
                    return DispatchResult::unchanged();
                };
                if self.state.project.is_expanded(id) {
                    return self.collapse_node(id);
                }
                match self.state.tree.parent(id) {
                    Some(parent) => self.select_node(parent),
                    None => DispatchResult::unchanged(),
                }
            }
            Command::TreeToggle => {
                let Some(id) = self.state.selected() else {
                    return DispatchResult::unchanged();
                };
                if self.state.project.is_expanded(id) {
                    self.collapse_node(id)
                } else {
                    self.expand_node(id)
                }
            }
            Command::PanelUp | Command::PanelDown => {
                let delta = if cmd == Command::PanelUp { -1 } else { 1 };
                let changed = self
                    .state
                    .panel
                    .as_mut()
                    .is_some_and(|panel| panel.move_focus(delta));
                DispatchResult::changed(changed)
            }
            Command::PanelActivate => self.activate_focused_field(),
            Command::ClosePanel => self.dispose_panel(),
            Command::FocusTree => DispatchResult::changed(self.set_focus(FocusTarget::Tree)),
            Command::FocusPanel => DispatchResult::changed(self.set_focus(FocusTarget::Panel)),
            Command::ToggleFocus => {
                let next = match self.state.ui.focus {
                    FocusTarget::Tree => FocusTarget::Panel,
                    FocusTarget::Panel => FocusTarget::Tree,
                };
                DispatchResult::changed(self.set_focus(next))
            }
            Command::Quit => {
                self.state.ui.should_quit = true;
                DispatchResult::changed(true)
            }
        }
    }

    /// Selection change: remember the folder, drop the last status message
    /// and rebuild the panel from it.
    fn select_node(&mut self, id: NodeId) -> DispatchResult {
        if !self.state.tree.contains(id) || !self.state.project.select(id) {
            return DispatchResult::unchanged();
        }
        self.state.ui.status = None;
        self.refresh_panel();
        DispatchResult::changed(true)
    }

    /// Expand/collapse keep the selection but still refresh the panel from the
    /// last selected folder.
    fn expand_node(&mut self, id: NodeId) -> DispatchResult {
        if !self.state.project.expand(&self.state.tree, id) {
            return DispatchResult::unchanged();
        }
        self.refresh_panel();
        DispatchResult::changed(true)
    }

    fn collapse_node(&mut self, id: NodeId) -> DispatchResult {
        if !self.state.project.collapse(&self.state.tree, id) {
            return DispatchResult::unchanged();
        }
        self.refresh_panel();
        DispatchResult::changed(true)
    }

    fn set_focus(&mut self, target: FocusTarget) -> bool {
        let target = if target == FocusTarget::Panel && self.state.panel.is_none() {
            FocusTarget::Tree
        } else {
            target
        };
        if self.state.ui.focus == target {
            return false;
        }
        self.state.ui.focus = target;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
