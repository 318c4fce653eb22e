use crate::kernel::{Action, PendingPrompt};

use super::DispatchResult;

impl super::Store {
    pub(super) fn open_quick_pick(
        &mut self,
        title: impl Into<String>,
        items: Vec<String>,
        pending: PendingPrompt,
    ) {
        let pick = &mut self.state.ui.quick_pick;
        pick.reset();
        pick.visible = true;
        pick.title = title.into();
        pick.items = items;
        pick.pending = Some(pending);
    }

    pub(super) fn open_input_dialog(
        &mut self,
        title: impl Into<String>,
        value: String,
        pending: PendingPrompt,
    ) {
        let dialog = &mut self.state.ui.input_dialog;
        dialog.reset();
        dialog.visible = true;
        dialog.title = title.into();
        dialog.cursor = value.len();
        dialog.value = value;
        dialog.pending = Some(pending);
    }

    pub(super) fn reduce_quick_pick_action(&mut self, action: Action) -> DispatchResult {
        let pick = &mut self.state.ui.quick_pick;
        if !pick.visible {
            return DispatchResult::unchanged();
        }

        match action {
            Action::QuickPickAppend(ch) => {
                pick.filter.push(ch);
                pick.selected = 0;
                DispatchResult::changed(true)
            }
            Action::QuickPickBackspace => {
                if pick.filter.pop().is_none() {
                    return DispatchResult::unchanged();
                }
                pick.selected = 0;
                DispatchResult::changed(true)
            }
            Action::QuickPickMoveSelection(delta) => {
                let len = pick.filtered().len();
                if len == 0 || delta == 0 {
                    return DispatchResult::unchanged();
                }
                let prev = pick.selected;
                pick.selected = if delta < 0 {
                    prev.saturating_sub(delta.unsigned_abs())
                } else {
                    (prev + delta as usize).min(len - 1)
                };
                DispatchResult::changed(pick.selected != prev)
            }
            Action::QuickPickAccept => {
                let Some(choice) = pick.current().map(str::to_string) else {
                    // Nothing to pick; only cancel closes the list.
                    return DispatchResult::unchanged();
                };
                let pending = pick.pending.take();
                pick.reset();

                let Some(pending) = pending else {
                    return DispatchResult::changed(true);
                };
                let mut result = self.resume_prompt(pending, choice);
                result.state_changed = true;
                result
            }
            Action::QuickPickCancel => {
                tracing::debug!(title = %pick.title, "quick pick dismissed");
                pick.reset();
                DispatchResult::changed(true)
            }
            _ => DispatchResult::unchanged(),
        }
    }

    pub(super) fn reduce_input_dialog_action(&mut self, action: Action) -> DispatchResult {
        let dialog = &mut self.state.ui.input_dialog;
        if !dialog.visible {
            return DispatchResult::unchanged();
        }

        match action {
            Action::InputDialogAppend(ch) => {
                dialog.error = None;
                if dialog.cursor > dialog.value.len() {
                    dialog.cursor = dialog.value.len();
                }
                dialog.value.insert(dialog.cursor, ch);
                dialog.cursor += ch.len_utf8();
                DispatchResult::changed(true)
            }
            Action::InputDialogBackspace => {
                if dialog.cursor == 0 {
                    return DispatchResult::unchanged();
                }
                dialog.error = None;
                let prev = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                dialog.value.drain(prev..dialog.cursor);
                dialog.cursor = prev;
                DispatchResult::changed(true)
            }
            Action::InputDialogCursorLeft => {
                if dialog.cursor == 0 {
                    return DispatchResult::unchanged();
                }
                dialog.cursor = dialog.value[..dialog.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                DispatchResult::changed(true)
            }
            Action::InputDialogCursorRight => {
                if dialog.cursor >= dialog.value.len() {
                    return DispatchResult::unchanged();
                }
                dialog.cursor = dialog.value[dialog.cursor..]
                    .chars()
                    .next()
                    .map(|ch| dialog.cursor + ch.len_utf8())
                    .unwrap_or(dialog.value.len());
                DispatchResult::changed(true)
            }
            Action::InputDialogAccept => {
                let Some(pending) = dialog.pending.as_ref() else {
                    dialog.reset();
                    return DispatchResult::changed(true);
                };

                let value = match pending {
                    PendingPrompt::FolderLabel { .. } => {
                        let value = dialog.value.trim();
                        if value.is_empty() {
                            let prev = dialog.error.replace("Name required".to_string());
                            return DispatchResult::changed(
                                prev.as_deref() != dialog.error.as_deref(),
                            );
                        }
                        value.to_string()
                    }
                    _ => dialog.value.clone(),
                };

                let pending = dialog.pending.take();
                dialog.reset();

                let Some(pending) = pending else {
                    return DispatchResult::changed(true);
                };
                let mut result = self.resume_prompt(pending, value);
                result.state_changed = true;
                result
            }
            Action::InputDialogCancel => {
                tracing::debug!(title = %dialog.title, "input dialog dismissed");
                dialog.reset();
                DispatchResult::changed(true)
            }
            _ => DispatchResult::unchanged(),
        }
    }

    /// Continues the flow that opened a prompt with the user's answer.
    fn resume_prompt(&mut self, pending: PendingPrompt, answer: String) -> DispatchResult {
        match pending {
            PendingPrompt::FolderType { parent } => {
                self.open_input_dialog(
                    "Enter folder name",
                    String::new(),
                    PendingPrompt::FolderLabel {
                        parent: Some(parent),
                        type_name: answer,
                    },
                );
                DispatchResult::changed(true)
            }
            PendingPrompt::FolderLabel { parent, type_name } => {
                self.create_folder(parent, &type_name, answer)
            }
            PendingPrompt::FieldValue { node, key } => self.apply_field_value(node, key, answer),
        }
    }
}
