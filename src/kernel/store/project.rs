use crate::kernel::PendingPrompt;
use crate::models::{FolderNode, NodeId};

use super::DispatchResult;

impl super::Store {
    /// `project.addFolder`: pick a child type allowed under `parent`, then
    /// ask for a label.
    pub(super) fn start_add_folder(&mut self, parent: Option<NodeId>) -> DispatchResult {
        if self.state.ui.prompt_open() {
            return DispatchResult::unchanged();
        }
        let Some(parent) = parent.filter(|&id| self.state.tree.contains(id)) else {
            tracing::debug!("add folder ignored: no folder selected");
            return DispatchResult::unchanged();
        };
        let type_name = self.state.tree.type_name(parent).unwrap_or_default();
        if let Err(err) = self.state.schema.lookup(type_name) {
            tracing::warn!(error = %err, "parent folder has no definition");
        }

        let items = self.state.schema.allowed_children(type_name);
        self.state.ui.status = None;
        self.open_quick_pick("Select folder type", items, PendingPrompt::FolderType { parent });
        DispatchResult::changed(true)
    }

    /// `project.addRootFolder`: ask for a label, the type is the root type.
    pub(super) fn start_add_root_folder(&mut self) -> DispatchResult {
        if self.state.ui.prompt_open() {
            return DispatchResult::unchanged();
        }
        let type_name = self.state.schema.root_type().name.clone();
        self.state.ui.status = None;
        self.open_input_dialog(
            "Set Project Name",
            String::new(),
            PendingPrompt::FolderLabel {
                parent: None,
                type_name,
            },
        );
        DispatchResult::changed(true)
    }

    pub(super) fn create_folder(
        &mut self,
        parent: Option<NodeId>,
        type_name: &str,
        label: String,
    ) -> DispatchResult {
        let def = match self.state.schema.lookup(type_name) {
            Ok(def) => def,
            Err(err) => {
                tracing::warn!(error = %err, "folder not created");
                self.state.ui.status = Some(err.to_string());
                return DispatchResult::changed(true);
            }
        };

        let node = FolderNode::of_type(label.as_str(), def);
        if let Err(err) = self.state.tree.add_item(node, parent) {
            tracing::warn!(error = %err, "folder not created");
            self.state.ui.status = Some(err.to_string());
            return DispatchResult::changed(true);
        }
        tracing::info!(label = %label, type_name, "folder added");

        self.state.project.sync(&self.state.tree);
        if let Some(parent) = parent {
            if self.state.project.reveal(&self.state.tree, parent) {
                self.refresh_panel();
            }
        }
        self.state.ui.status = Some(format!("Added {type_name} \"{label}\""));
        DispatchResult::changed(true)
    }
}
