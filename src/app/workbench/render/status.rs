use super::super::Workbench;
use crate::kernel::FocusTarget;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

impl Workbench {
    fn focus_label(&self) -> &'static str {
        match self.store.state().ui.focus {
            FocusTarget::Tree => "Tree",
            FocusTarget::Panel => "Properties",
        }
    }

    fn key_hints(&self) -> &'static str {
        let ui = &self.store.state().ui;
        if ui.prompt_open() {
            return "Enter confirm  Esc cancel";
        }
        match ui.focus {
            FocusTarget::Tree => "a add  A root  ←/→ fold  Tab panel  ^Q quit",
            FocusTarget::Panel => "Enter edit  Esc tree  ^W close  ^Q quit",
        }
    }

    pub(super) fn render_header(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let line = Line::from(vec![
            Span::styled(
                " codearchitect ",
                Style::default()
                    .fg(self.theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} · {} folders", state.schema.root_type().name, state.tree.len()),
                Style::default().fg(self.theme.muted_fg),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    pub(super) fn render_status(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let project = &state.project;

        let left = match state.ui.status.as_deref() {
            Some(message) => message.to_string(),
            None => project
                .selected_row()
                .and_then(|idx| project.rows.get(idx))
                .map(|row| {
                    if row.icon.is_empty() {
                        format!("{} ({})", row.label, row.type_name)
                    } else {
                        format!("{} ({}, {})", row.label, row.type_name, row.icon)
                    }
                })
                .unwrap_or_else(|| "No folder selected".to_string()),
        };

        let text = format!(" {} | {} | {}", left, self.focus_label(), self.key_hints());
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(self.theme.muted_fg)),
            area,
        );
    }
}
