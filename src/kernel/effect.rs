use crate::models::PanelMessage;

/// Work the host performs after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Mirror a message into a host-rendered panel document (e.g. the HTML
    /// form) that keeps its own copy of field values.
    PostPanelMessage(PanelMessage),
}
