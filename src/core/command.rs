//! Semantic commands, independent of the keys that trigger them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== Project ====================
    /// Add a typed child under the invoking (selected) folder.
    AddFolder,
    /// Add a new top-level project folder.
    AddRootFolder,

    // ==================== Tree ====================
    TreeUp,
    TreeDown,
    TreeExpand,
    TreeCollapse,
    TreeToggle,

    // ==================== Panel ====================
    PanelUp,
    PanelDown,
    PanelActivate,
    ClosePanel,

    // ==================== Workbench ====================
    FocusTree,
    FocusPanel,
    ToggleFocus,
    Quit,
}

impl Command {
    pub const ALL: [Command; 15] = [
        Command::AddFolder,
        Command::AddRootFolder,
        Command::TreeUp,
        Command::TreeDown,
        Command::TreeExpand,
        Command::TreeCollapse,
        Command::TreeToggle,
        Command::PanelUp,
        Command::PanelDown,
        Command::PanelActivate,
        Command::ClosePanel,
        Command::FocusTree,
        Command::FocusPanel,
        Command::ToggleFocus,
        Command::Quit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::AddFolder => "project.addFolder",
            Command::AddRootFolder => "project.addRootFolder",
            Command::TreeUp => "tree.up",
            Command::TreeDown => "tree.down",
            Command::TreeExpand => "tree.expand",
            Command::TreeCollapse => "tree.collapse",
            Command::TreeToggle => "tree.toggle",
            Command::PanelUp => "panel.up",
            Command::PanelDown => "panel.down",
            Command::PanelActivate => "panel.activate",
            Command::ClosePanel => "panel.close",
            Command::FocusTree => "workbench.focusTree",
            Command::FocusPanel => "workbench.focusPanel",
            Command::ToggleFocus => "workbench.toggleFocus",
            Command::Quit => "workbench.quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Command::AddFolder => "Add Folder",
            Command::AddRootFolder => "Add Root Folder",
            Command::TreeUp => "Previous Folder",
            Command::TreeDown => "Next Folder",
            Command::TreeExpand => "Expand",
            Command::TreeCollapse => "Collapse",
            Command::TreeToggle => "Toggle Expand",
            Command::PanelUp => "Previous Field",
            Command::PanelDown => "Next Field",
            Command::PanelActivate => "Edit Field",
            Command::ClosePanel => "Close Properties",
            Command::FocusTree => "Focus Project Tree",
            Command::FocusPanel => "Focus Properties",
            Command::ToggleFocus => "Toggle Focus",
            Command::Quit => "Quit",
        }
    }

    pub fn is_project_command(&self) -> bool {
        matches!(self, Command::AddFolder | Command::AddRootFolder)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
