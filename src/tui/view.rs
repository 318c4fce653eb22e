use crate::core::event::InputEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

pub trait View {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: Rect);

    fn cursor_position(&self) -> Option<(u16, u16)> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Handled; redraw.
    Consumed,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn from_changed(changed: bool) -> Self {
        if changed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, EventResult::Ignored)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/view.rs"]
mod tests;
