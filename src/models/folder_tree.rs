//! Project folder tree: an arena-backed forest of typed folders.
//!
//! The arena owns every node; structure lives in `parent`/`children` ids so a
//! parent can be reached from a child without reference cycles.

use slotmap::{new_key_type, SlotMap};
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::schema::TypeDefinition;

new_key_type! { pub struct NodeId; }

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    pub label: String,
    pub type_name: String,
    pub description: String,
    pub icon_light: String,
    pub icon_dark: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl FolderNode {
    pub fn new(label: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            type_name: type_name.into(),
            description: String::new(),
            icon_light: String::new(),
            icon_dark: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// A fresh folder carrying the display metadata of its type.
    pub fn of_type(label: impl Into<String>, def: &TypeDefinition) -> Self {
        Self {
            description: def.description.clone(),
            icon_light: def.icon_light.clone(),
            icon_dark: def.icon_dark.clone(),
            ..Self::new(label, def.name.clone())
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderTreeError {
    InvalidNodeId,
}

impl fmt::Display for FolderTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderTreeError::InvalidNodeId => write!(f, "invalid node id"),
        }
    }
}

impl std::error::Error for FolderTreeError {}

/// "Something in the tree changed"; subscribers redraw from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeChanged;

pub struct TreeSubscription {
    rx: Receiver<TreeChanged>,
}

impl TreeSubscription {
    pub fn try_recv(&self) -> Option<TreeChanged> {
        match self.rx.try_recv() {
            Ok(ev) => Some(ev),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Consumes every pending notification, returning how many there were.
    pub fn drain(&self) -> usize {
        let mut n = 0;
        while self.try_recv().is_some() {
            n += 1;
        }
        n
    }
}

impl fmt::Debug for TreeSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeSubscription").finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct FolderTree {
    arena: SlotMap<NodeId, FolderNode>,
    roots: Vec<NodeId>,
    subscribers: Vec<Sender<TreeChanged>>,
}

impl fmt::Debug for FolderTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FolderTree")
            .field("nodes", &self.arena.len())
            .field("roots", &self.roots.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl FolderTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> TreeSubscription {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        TreeSubscription { rx }
    }

    /// Appends `node` under `parent`, or as a new root when `parent` is `None`.
    /// Type legality is the caller's concern.
    pub fn add_item(
        &mut self,
        mut node: FolderNode,
        parent: Option<NodeId>,
    ) -> Result<NodeId, FolderTreeError> {
        if let Some(parent_id) = parent {
            if !self.arena.contains_key(parent_id) {
                return Err(FolderTreeError::InvalidNodeId);
            }
        }

        node.parent = parent;
        node.children.clear();
        let id = self.arena.insert(node);

        match parent {
            Some(parent_id) => match self.arena.get_mut(parent_id) {
                Some(parent_node) => parent_node.children.push(id),
                None => {
                    self.arena.remove(id);
                    return Err(FolderTreeError::InvalidNodeId);
                }
            },
            None => self.roots.push(id),
        }

        self.notify();
        Ok(id)
    }

    /// Children of `node`, or the roots for `None`. Unknown ids have no children.
    pub fn children(&self, node: Option<NodeId>) -> &[NodeId] {
        match node {
            Some(id) => self.arena.get(id).map(|n| n.children()).unwrap_or(&[]),
            None => &self.roots,
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node).and_then(|n| n.parent)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn get(&self, node: NodeId) -> Option<&FolderNode> {
        self.arena.get(node)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.arena.contains_key(node)
    }

    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.arena.get(node).map(|n| n.label.as_str())
    }

    pub fn type_name(&self, node: NodeId) -> Option<&str> {
        self.arena.get(node).map(|n| n.type_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Ancestors of `node`, nearest first.
    pub fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(node);
        while let Some(id) = current {
            out.push(id);
            current = self.parent(id);
        }
        out
    }

    /// Depth-first pre-order walk of the whole forest as `(id, depth)`.
    pub fn walk(&self) -> Vec<(NodeId, usize)> {
        let mut result = Vec::with_capacity(self.arena.len());
        let mut stack: Vec<(NodeId, usize)> = self.roots.iter().rev().map(|&id| (id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            result.push((id, depth));
            for &child in self.children(Some(id)).iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        result
    }

    fn notify(&mut self) {
        self.subscribers.retain(|tx| tx.send(TreeChanged).is_ok());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/folder_tree.rs"]
mod tests;
