use crate::core::Command;
use crate::models::{NodeId, PanelMessage};

#[derive(Debug, Clone)]
pub enum Action {
    RunCommand(Command),
    /// `project.addFolder` invoked on an explicit node (tree context menu).
    AddFolderTo {
        parent: NodeId,
    },
    TreeSelect(NodeId),
    TreeClickRow {
        row: usize,
    },
    TreeExpand(NodeId),
    TreeCollapse(NodeId),
    TreeScroll {
        delta: isize,
    },
    TreeSetViewHeight {
        height: usize,
    },
    /// A message posted by the panel document.
    PanelMessage(PanelMessage),
    PanelFocusField {
        index: usize,
    },
    PanelSetViewHeight {
        height: usize,
    },
    /// The host tore the panel down.
    PanelDisposed,
    QuickPickAppend(char),
    QuickPickBackspace,
    QuickPickMoveSelection(isize),
    QuickPickAccept,
    QuickPickCancel,
    InputDialogAppend(char),
    InputDialogBackspace,
    InputDialogCursorLeft,
    InputDialogCursorRight,
    InputDialogAccept,
    InputDialogCancel,
}
