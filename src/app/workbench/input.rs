use super::util;
use super::Workbench;
use crate::core::event::{
    InputEvent, Key, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crate::core::Command;
use crate::kernel::services::KeybindingContext;
use crate::kernel::{Action as KernelAction, FocusTarget};
use crate::tui::view::EventResult;

const SCROLL_STEP: isize = 3;
const PAGE_STEP: isize = 10;

pub(super) fn handle_input(workbench: &mut Workbench, event: &InputEvent) -> EventResult {
    let result = match event {
        InputEvent::Key(key_event) => workbench.handle_key_event(key_event),
        InputEvent::Paste(text) => workbench.handle_paste(text),
        InputEvent::Mouse(mouse_event) => workbench.handle_mouse(mouse_event),
        InputEvent::Resize(_, _) => EventResult::Consumed,
        InputEvent::FocusGained | InputEvent::FocusLost => EventResult::Ignored,
    };

    if workbench.should_quit() {
        EventResult::Quit
    } else {
        result
    }
}

/// Printable character typed without Ctrl/Alt.
fn typed_char(event: &KeyEvent) -> Option<char> {
    match event.code {
        KeyCode::Char(ch)
            if !event.modifiers.contains(KeyModifiers::CONTROL)
                && !event.modifiers.contains(KeyModifiers::ALT) =>
        {
            Some(ch)
        }
        _ => None,
    }
}

impl Workbench {
    fn handle_key_event(&mut self, event: &KeyEvent) -> EventResult {
        if event.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }

        let key = Key::from(*event);
        if self.keybindings.resolve(KeybindingContext::Global, &key) == Some(Command::Quit)
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.dispatch_kernel(KernelAction::RunCommand(Command::Quit));
            return EventResult::Quit;
        }

        let ui = &self.store.state().ui;
        if ui.quick_pick.visible {
            return self.handle_quick_pick_key(event);
        }
        if ui.input_dialog.visible {
            return self.handle_input_dialog_key(event);
        }

        let context = match self.focus() {
            FocusTarget::Tree => KeybindingContext::Tree,
            FocusTarget::Panel => KeybindingContext::Panel,
        };
        let Some(command) = self.keybindings.resolve(context, &key) else {
            return EventResult::Ignored;
        };
        EventResult::from_changed(self.dispatch_kernel(KernelAction::RunCommand(command)))
    }

    fn handle_quick_pick_key(&mut self, event: &KeyEvent) -> EventResult {
        let action = match event.code {
            KeyCode::Esc => KernelAction::QuickPickCancel,
            KeyCode::Enter => KernelAction::QuickPickAccept,
            KeyCode::Up => KernelAction::QuickPickMoveSelection(-1),
            KeyCode::Down => KernelAction::QuickPickMoveSelection(1),
            KeyCode::PageUp => KernelAction::QuickPickMoveSelection(-PAGE_STEP),
            KeyCode::PageDown => KernelAction::QuickPickMoveSelection(PAGE_STEP),
            KeyCode::Backspace => KernelAction::QuickPickBackspace,
            _ => match typed_char(event) {
                Some(ch) => KernelAction::QuickPickAppend(ch),
                None => return EventResult::Ignored,
            },
        };
        EventResult::from_changed(self.dispatch_kernel(action))
    }

    fn handle_input_dialog_key(&mut self, event: &KeyEvent) -> EventResult {
        let action = match event.code {
            KeyCode::Esc => KernelAction::InputDialogCancel,
            KeyCode::Enter => KernelAction::InputDialogAccept,
            KeyCode::Left => KernelAction::InputDialogCursorLeft,
            KeyCode::Right => KernelAction::InputDialogCursorRight,
            KeyCode::Backspace => KernelAction::InputDialogBackspace,
            _ => match typed_char(event) {
                Some(ch) => KernelAction::InputDialogAppend(ch),
                None => return EventResult::Ignored,
            },
        };
        EventResult::from_changed(self.dispatch_kernel(action))
    }

    fn handle_paste(&mut self, text: &str) -> EventResult {
        let ui = &self.store.state().ui;
        let append: fn(char) -> KernelAction = if ui.quick_pick.visible {
            KernelAction::QuickPickAppend
        } else if ui.input_dialog.visible {
            KernelAction::InputDialogAppend
        } else {
            return EventResult::Ignored;
        };

        let mut changed = false;
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            changed |= self.dispatch_kernel(append(ch));
        }
        EventResult::from_changed(changed)
    }

    fn handle_mouse(&mut self, event: &MouseEvent) -> EventResult {
        // Prompts are modal.
        if self.store.state().ui.prompt_open() {
            return EventResult::Ignored;
        }

        let in_tree = self
            .last_tree_area
            .is_some_and(|area| util::rect_contains(area, event.column, event.row));
        let in_panel = self
            .last_panel_area
            .is_some_and(|area| util::rect_contains(area, event.column, event.row));

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if in_tree => self.click_tree(event.row),
            MouseEventKind::Down(MouseButton::Left) if in_panel => self.click_panel(event.row),
            MouseEventKind::ScrollUp if in_tree => EventResult::from_changed(
                self.dispatch_kernel(KernelAction::TreeScroll {
                    delta: -SCROLL_STEP,
                }),
            ),
            MouseEventKind::ScrollDown if in_tree => EventResult::from_changed(
                self.dispatch_kernel(KernelAction::TreeScroll { delta: SCROLL_STEP }),
            ),
            _ => EventResult::Ignored,
        }
    }

    /// First click selects a row, a click on the selected row toggles it.
    fn click_tree(&mut self, y: u16) -> EventResult {
        let Some(area) = self.last_tree_area else {
            return EventResult::Ignored;
        };
        let project = &self.store.state().project;
        let row = usize::from(y.saturating_sub(area.y)) + project.scroll_offset;
        let Some(id) = project.row_id(row) else {
            return EventResult::Ignored;
        };

        if project.selected() == Some(id) {
            let mut changed = self.dispatch_kernel(KernelAction::RunCommand(Command::FocusTree));
            changed |= self.dispatch_kernel(KernelAction::RunCommand(Command::TreeToggle));
            return EventResult::from_changed(changed);
        }
        EventResult::from_changed(self.dispatch_kernel(KernelAction::TreeClickRow { row }))
    }

    fn click_panel(&mut self, y: u16) -> EventResult {
        let Some(area) = self.last_panel_area else {
            return EventResult::Ignored;
        };
        let row = usize::from(y.saturating_sub(area.y));
        let Some(panel) = self.store.state().panel.as_ref() else {
            return EventResult::Ignored;
        };
        let Some(index) = panel.field_at_row(row) else {
            return EventResult::Ignored;
        };
        let already_focused =
            self.focus() == FocusTarget::Panel && panel.focused_field == index;

        if already_focused {
            return EventResult::from_changed(
                self.dispatch_kernel(KernelAction::RunCommand(Command::PanelActivate)),
            );
        }
        EventResult::from_changed(self.dispatch_kernel(KernelAction::PanelFocusField { index }))
    }
}
