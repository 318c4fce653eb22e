use super::super::{util, Workbench};
use crate::kernel::{Action as KernelAction, FocusTarget};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const EMPTY_HINT: &str = "No folders yet. Press Shift+A to create the project.";

impl Workbench {
    pub(super) fn render_tree(&mut self, frame: &mut Frame, area: Rect) {
        let focused =
            self.focus() == FocusTarget::Tree && !self.store.state().ui.prompt_open();
        let border = if focused {
            self.theme.focus_border
        } else {
            self.theme.inactive_border
        };
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(" Folders "),
            area,
        );

        let inner = util::inner(area);
        if inner.width == 0 || inner.height == 0 {
            self.last_tree_area = None;
            return;
        }
        self.last_tree_area = Some(inner);
        self.dispatch_kernel(KernelAction::TreeSetViewHeight {
            height: usize::from(inner.height),
        });

        let project = &self.store.state().project;
        if project.rows.is_empty() {
            let hint = Paragraph::new(EMPTY_HINT)
                .style(Style::default().fg(self.theme.muted_fg))
                .wrap(Wrap { trim: true });
            frame.render_widget(hint, inner);
            return;
        }

        let width = usize::from(inner.width);
        let selected = project.selected_row();
        let selected_style = if focused {
            Style::default()
                .bg(self.theme.selected_bg)
                .fg(self.theme.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(self.theme.selected_bg)
        };
        let muted = Style::default().fg(self.theme.muted_fg);

        let mut lines = Vec::with_capacity(usize::from(inner.height));
        for (idx, row) in project
            .rows
            .iter()
            .enumerate()
            .skip(project.scroll_offset)
            .take(usize::from(inner.height))
        {
            let marker = match (row.has_children, row.is_expanded) {
                (true, true) => "▾ ",
                (true, false) => "▸ ",
                (false, _) => "  ",
            };
            let head = format!(
                "{}{marker}{}",
                "  ".repeat(usize::from(row.depth)),
                row.label
            );

            if selected == Some(idx) {
                let text = if row.description.is_empty() {
                    head
                } else {
                    format!("{head}  {}", row.description)
                };
                lines.push(Line::from(Span::styled(
                    util::fit_width(&text, width),
                    selected_style,
                )));
                continue;
            }

            let mut spans = vec![Span::raw(head)];
            if !row.description.is_empty() {
                spans.push(Span::styled(format!("  {}", row.description), muted));
            }
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
