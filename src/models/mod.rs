//! Data models: folder type schema, project folder tree, property form.

pub mod folder_tree;
pub mod form;
pub mod schema;

pub use folder_tree::{FolderNode, FolderTree, FolderTreeError, NodeId, TreeChanged, TreeSubscription};
pub use form::{render as render_form, FormControl, FormDocument, FormField, PanelMessage};
pub use schema::{ConfigError, FieldSpec, LookupError, Properties, Schema, TypeDefinition};
