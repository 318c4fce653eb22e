use rustc_hash::{FxHashMap, FxHashSet};

use crate::models::{FolderTree, FormDocument, FormField, NodeId, Schema, TreeSubscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Tree,
    Panel,
}

/// Which icon of a type's light/dark pair the host shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconVariant {
    Light,
    #[default]
    Dark,
}

impl IconVariant {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow {
    pub id: NodeId,
    pub depth: u16,
    pub label: String,
    pub description: String,
    pub type_name: String,
    pub icon: String,
    pub has_children: bool,
    pub is_expanded: bool,
}

/// Host-facing view of the folder tree: flattened visible rows, expand state
/// and the last selected folder.
#[derive(Debug)]
pub struct ProjectViewState {
    subscription: TreeSubscription,
    expanded: FxHashSet<NodeId>,
    selected: Option<NodeId>,
    pub rows: Vec<ProjectRow>,
    index_by_id: FxHashMap<NodeId, usize>,
    pub view_height: usize,
    pub scroll_offset: usize,
    pub icon_variant: IconVariant,
}

impl ProjectViewState {
    pub fn new(tree: &mut FolderTree, icon_variant: IconVariant) -> Self {
        let mut state = Self {
            subscription: tree.subscribe(),
            expanded: FxHashSet::default(),
            selected: None,
            rows: Vec::new(),
            index_by_id: FxHashMap::default(),
            view_height: 10,
            scroll_offset: 0,
            icon_variant,
        };
        state.refresh_rows(tree);
        state
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.selected
            .and_then(|id| self.index_by_id.get(&id).copied())
    }

    /// Rebuilds rows when the tree announced a change since the last sync.
    pub fn sync(&mut self, tree: &FolderTree) -> bool {
        if self.subscription.drain() == 0 {
            return false;
        }
        self.refresh_rows(tree);
        true
    }

    pub fn refresh_rows(&mut self, tree: &FolderTree) {
        self.rows.clear();
        self.index_by_id.clear();

        let mut stack: Vec<(NodeId, u16)> =
            tree.roots().iter().rev().map(|&id| (id, 0)).collect();
        while let Some((id, depth)) = stack.pop() {
            let Some(node) = tree.get(id) else {
                continue;
            };
            let is_expanded = self.expanded.contains(&id);
            let icon = match self.icon_variant {
                IconVariant::Light => node.icon_light.clone(),
                IconVariant::Dark => node.icon_dark.clone(),
            };

            self.index_by_id.insert(id, self.rows.len());
            self.rows.push(ProjectRow {
                id,
                depth,
                label: node.label.clone(),
                description: node.description.clone(),
                type_name: node.type_name.clone(),
                icon,
                has_children: !node.children().is_empty(),
                is_expanded,
            });

            if is_expanded {
                for &child in node.children().iter().rev() {
                    stack.push((child, depth.saturating_add(1)));
                }
            }
        }

        if let Some(index) = self.selected_row() {
            self.keep_row_visible(index);
        } else {
            self.clamp_scroll();
        }
    }

    pub fn select(&mut self, id: NodeId) -> bool {
        if self.selected == Some(id) {
            return false;
        }
        self.selected = Some(id);
        if let Some(index) = self.index_by_id.get(&id).copied() {
            self.keep_row_visible(index);
        }
        true
    }

    /// Moves the cursor by `delta` rows; returns the newly selected folder.
    pub fn move_selection(&mut self, delta: isize) -> Option<NodeId> {
        if self.rows.is_empty() || delta == 0 {
            return None;
        }

        let new_index = match self.selected_row() {
            Some(current) => {
                let next = if delta < 0 {
                    current.saturating_sub(delta.unsigned_abs())
                } else {
                    (current + delta as usize).min(self.rows.len() - 1)
                };
                if next == current {
                    return None;
                }
                next
            }
            None => {
                if delta < 0 {
                    self.rows.len() - 1
                } else {
                    0
                }
            }
        };

        let id = self.rows[new_index].id;
        self.select(id);
        Some(id)
    }

    pub fn row_id(&self, row: usize) -> Option<NodeId> {
        self.rows.get(row).map(|r| r.id)
    }

    pub fn expand(&mut self, tree: &FolderTree, id: NodeId) -> bool {
        if !tree.contains(id) || !self.expanded.insert(id) {
            return false;
        }
        self.refresh_rows(tree);
        true
    }

    pub fn collapse(&mut self, tree: &FolderTree, id: NodeId) -> bool {
        if !self.expanded.remove(&id) {
            return false;
        }
        self.refresh_rows(tree);
        true
    }

    pub fn toggle(&mut self, tree: &FolderTree, id: NodeId) -> bool {
        if self.expanded.contains(&id) {
            self.collapse(tree, id)
        } else {
            self.expand(tree, id)
        }
    }

    /// Expands `id` and all of its ancestors without touching the selection.
    pub fn reveal(&mut self, tree: &FolderTree, id: NodeId) -> bool {
        if !tree.contains(id) {
            return false;
        }
        let mut changed = self.expanded.insert(id);
        for ancestor in tree.ancestors(id) {
            changed |= self.expanded.insert(ancestor);
        }
        self.refresh_rows(tree);
        if let Some(index) = self.index_by_id.get(&id).copied() {
            self.keep_row_visible(index);
        }
        changed
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;
        match self.selected_row() {
            Some(index) => self.keep_row_visible(index),
            None => self.clamp_scroll(),
        }
        true
    }

    pub fn scroll(&mut self, delta: isize) -> bool {
        if self.rows.is_empty() || delta == 0 {
            return false;
        }

        let max_scroll = self.rows.len().saturating_sub(self.view_height.max(1));
        let prev = self.scroll_offset;
        if delta > 0 {
            self.scroll_offset = (self.scroll_offset + delta as usize).min(max_scroll);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(delta.unsigned_abs());
        }
        self.scroll_offset != prev
    }

    fn keep_row_visible(&mut self, index: usize) {
        let height = self.view_height.max(1);
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + height {
            self.scroll_offset = index + 1 - height;
        }
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let max_scroll = self.rows.len().saturating_sub(self.view_height.max(1));
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }
}

/// The properties panel. At most one exists; the slot in [`AppState`] is
/// `None` until a folder with a property schema is selected.
#[derive(Debug, Clone)]
pub struct PanelState {
    pub title: String,
    node: Option<NodeId>,
    document: FormDocument,
    pub focused_field: usize,
    pub view_height: usize,
    pub scroll_offset: usize,
    revision: u64,
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            title: String::from("Properties"),
            node: None,
            document: FormDocument::empty(),
            focused_field: 0,
            view_height: 10,
            scroll_offset: 0,
            revision: 0,
        }
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    pub(crate) fn document_mut(&mut self) -> &mut FormDocument {
        &mut self.document
    }

    /// Number of full rebuilds since the panel was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn focused(&self) -> Option<&FormField> {
        self.document.fields().get(self.focused_field)
    }

    pub(crate) fn show(&mut self, node: NodeId, title: String, document: FormDocument) {
        self.node = Some(node);
        self.title = title;
        self.document = document;
        self.revision += 1;
        self.focused_field = self
            .focused_field
            .min(self.document.len().saturating_sub(1));
        self.keep_focus_visible();
    }

    pub fn move_focus(&mut self, delta: isize) -> bool {
        let len = self.document.len();
        if len == 0 || delta == 0 {
            return false;
        }
        let prev = self.focused_field;
        self.focused_field = if delta < 0 {
            prev.saturating_sub(delta.unsigned_abs())
        } else {
            (prev + delta as usize).min(len - 1)
        };
        self.keep_focus_visible();
        self.focused_field != prev
    }

    /// Focuses the field at `index`; out of range indices are ignored.
    pub fn focus_field(&mut self, index: usize) -> bool {
        if index >= self.document.len() || index == self.focused_field {
            return false;
        }
        self.focused_field = index;
        self.keep_focus_visible();
        true
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;
        self.keep_focus_visible();
        true
    }

    /// Field index shown on panel row `row`.
    pub fn field_at_row(&self, row: usize) -> Option<usize> {
        let index = self.scroll_offset + row;
        (index < self.document.len()).then_some(index)
    }

    fn keep_focus_visible(&mut self) {
        let height = self.view_height.max(1);
        if self.focused_field < self.scroll_offset {
            self.scroll_offset = self.focused_field;
        } else if self.focused_field >= self.scroll_offset + height {
            self.scroll_offset = self.focused_field + 1 - height;
        }
        let max_scroll = self.document.len().saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

/// What a prompt resumes with once the user answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingPrompt {
    FolderType { parent: NodeId },
    FolderLabel {
        parent: Option<NodeId>,
        type_name: String,
    },
    FieldValue { node: NodeId, key: String },
}

#[derive(Debug, Clone, Default)]
pub struct QuickPickState {
    pub visible: bool,
    pub title: String,
    pub items: Vec<String>,
    pub filter: String,
    pub selected: usize,
    pub pending: Option<PendingPrompt>,
}

impl QuickPickState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Items matching the filter (case-insensitive substring), in order.
    pub fn filtered(&self) -> Vec<&str> {
        let needle = self.filter.to_lowercase();
        self.items
            .iter()
            .map(String::as_str)
            .filter(|item| needle.is_empty() || item.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn current(&self) -> Option<&str> {
        self.filtered().get(self.selected).copied()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputDialogState {
    pub visible: bool,
    pub title: String,
    pub value: String,
    pub cursor: usize,
    pub error: Option<String>,
    pub pending: Option<PendingPrompt>,
}

impl InputDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: FocusTarget,
    pub quick_pick: QuickPickState,
    pub input_dialog: InputDialogState,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl UiState {
    pub fn prompt_open(&self) -> bool {
        self.quick_pick.visible || self.input_dialog.visible
    }
}

#[derive(Debug)]
pub struct AppState {
    pub schema: Schema,
    pub tree: FolderTree,
    pub project: ProjectViewState,
    pub panel: Option<PanelState>,
    pub ui: UiState,
}

impl AppState {
    pub fn new(schema: Schema, icon_variant: IconVariant) -> Self {
        let mut tree = FolderTree::new();
        let project = ProjectViewState::new(&mut tree, icon_variant);
        Self {
            schema,
            tree,
            project,
            panel: None,
            ui: UiState::default(),
        }
    }

    /// The last selected folder, if any.
    pub fn selected(&self) -> Option<NodeId> {
        self.project.selected()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
