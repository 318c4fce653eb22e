use crate::kernel::{Effect, FocusTarget, PanelState, PendingPrompt};
use crate::models::{render_form, FormControl, FormDocument, NodeId, PanelMessage};

use super::DispatchResult;

impl super::Store {
    /// Rebuilds the panel from the last selected folder.
    ///
    /// A type with a property schema creates the panel if needed. Anything
    /// else blanks an open panel and never opens one.
    pub(super) fn refresh_panel(&mut self) -> bool {
        let Some(node_id) = self.state.project.selected() else {
            return false;
        };
        let Some(node) = self.state.tree.get(node_id) else {
            return false;
        };
        let title = format!("Properties: {}", node.label);

        let properties = match self.state.schema.lookup(&node.type_name) {
            Ok(def) => def.properties(),
            Err(err) => {
                tracing::warn!(error = %err, "selected folder has no definition");
                None
            }
        };

        match properties {
            Some(properties) => {
                let document = render_form(Some(properties));
                self.state
                    .panel
                    .get_or_insert_with(PanelState::new)
                    .show(node_id, title, document);
                true
            }
            None => match self.state.panel.as_mut() {
                Some(panel) => {
                    panel.show(node_id, title, FormDocument::empty());
                    true
                }
                None => false,
            },
        }
    }

    pub(super) fn reduce_panel_message(&mut self, message: PanelMessage) -> DispatchResult {
        tracing::debug!(?message, "panel message");
        match message {
            PanelMessage::Search { key } => self.open_field_search(key),
            PanelMessage::Update { key, value } => {
                let Some(node) = self.state.panel.as_ref().and_then(PanelState::node) else {
                    return DispatchResult::unchanged();
                };
                self.apply_field_value(node, key, value)
            }
        }
    }

    fn open_field_search(&mut self, key: String) -> DispatchResult {
        if self.state.ui.prompt_open() {
            return DispatchResult::unchanged();
        }
        let Some(panel) = self.state.panel.as_ref() else {
            return DispatchResult::unchanged();
        };
        let Some(node) = panel.node() else {
            return DispatchResult::unchanged();
        };
        let Some(field) = panel.document().field(&key) else {
            tracing::debug!(key = %key, "search for unknown field");
            return DispatchResult::unchanged();
        };
        let Some(candidates) = field.search_candidates(self.state.schema.names()) else {
            tracing::debug!(key = %key, "field is not searchable");
            return DispatchResult::unchanged();
        };

        self.open_quick_pick(
            format!("Select {key}"),
            candidates,
            PendingPrompt::FieldValue { node, key },
        );
        DispatchResult::changed(true)
    }

    /// Writes `value` into the open panel's field and mirrors it to the
    /// host-rendered document. Stale answers for another folder are dropped.
    pub(super) fn apply_field_value(
        &mut self,
        node: NodeId,
        key: String,
        value: String,
    ) -> DispatchResult {
        let Some(panel) = self.state.panel.as_mut() else {
            return DispatchResult::unchanged();
        };
        if panel.node() != Some(node) {
            tracing::debug!(key = %key, "field value for a folder no longer shown");
            return DispatchResult::unchanged();
        }

        let message = PanelMessage::Update { key, value };
        if !panel.document_mut().apply(&message) {
            return DispatchResult::unchanged();
        }
        DispatchResult {
            effects: vec![Effect::PostPanelMessage(message)],
            state_changed: true,
        }
    }

    pub(super) fn activate_focused_field(&mut self) -> DispatchResult {
        if self.state.ui.prompt_open() {
            return DispatchResult::unchanged();
        }
        let Some(panel) = self.state.panel.as_ref() else {
            return DispatchResult::unchanged();
        };
        let (Some(node), Some(field)) = (panel.node(), panel.focused()) else {
            return DispatchResult::unchanged();
        };
        let key = field.key.clone();

        match &field.control {
            FormControl::Text { value } => {
                let value = value.clone();
                self.open_input_dialog(
                    format!("Set {key}"),
                    value,
                    PendingPrompt::FieldValue { node, key },
                );
                DispatchResult::changed(true)
            }
            FormControl::Select { .. } | FormControl::Reference { .. } => {
                self.open_field_search(key)
            }
            FormControl::Toggle { checked } => {
                let next = (!checked).to_string();
                self.apply_field_value(node, key, next)
            }
        }
    }

    pub(super) fn dispose_panel(&mut self) -> DispatchResult {
        if self.state.panel.take().is_none() {
            return DispatchResult::unchanged();
        }
        tracing::debug!("properties panel disposed");
        if self.state.ui.focus == FocusTarget::Panel {
            self.state.ui.focus = FocusTarget::Tree;
        }
        DispatchResult::changed(true)
    }
}
