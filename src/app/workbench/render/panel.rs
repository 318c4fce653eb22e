use super::super::{util, Workbench};
use crate::kernel::{Action as KernelAction, FocusTarget};
use crate::models::{FormControl, FormField};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

fn control_text(field: &FormField) -> String {
    match &field.control {
        FormControl::Text { value } => format!("[{value}]"),
        FormControl::Select { .. } => format!("< {} >", field.display_value()),
        FormControl::Toggle { checked: true } => "[x]".to_string(),
        FormControl::Toggle { checked: false } => "[ ]".to_string(),
        FormControl::Reference { value } => format!("{value}  (search)"),
    }
}

impl Workbench {
    pub(super) fn render_panel(&mut self, frame: &mut Frame, area: Rect) {
        let Some(title) = self.store.state().panel.as_ref().map(|p| p.title.clone()) else {
            self.last_panel_area = None;
            return;
        };

        let focused = self.store.state().ui.focus == FocusTarget::Panel
            && !self.store.state().ui.prompt_open();
        let border = if focused {
            self.theme.focus_border
        } else {
            self.theme.inactive_border
        };
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" {title} ")),
            area,
        );

        let inner = util::inner(area);
        if inner.width == 0 || inner.height == 0 {
            self.last_panel_area = None;
            return;
        }
        self.last_panel_area = Some(inner);
        self.dispatch_kernel(KernelAction::PanelSetViewHeight {
            height: usize::from(inner.height),
        });

        let Some(panel) = self.store.state().panel.as_ref() else {
            return;
        };
        let fields = panel.document().fields();
        if fields.is_empty() {
            frame.render_widget(
                Paragraph::new("No properties for this folder.")
                    .style(Style::default().fg(self.theme.muted_fg)),
                inner,
            );
            return;
        }

        let width = usize::from(inner.width);
        let key_width = fields
            .iter()
            .map(|field| field.key.width())
            .max()
            .unwrap_or(0)
            .min(width / 2);
        let key_style = Style::default().fg(self.theme.header_fg);
        let focus_style = Style::default()
            .bg(self.theme.selected_bg)
            .fg(self.theme.selected_fg)
            .add_modifier(Modifier::BOLD);

        let lines: Vec<Line> = fields
            .iter()
            .enumerate()
            .skip(panel.scroll_offset)
            .take(usize::from(inner.height))
            .map(|(idx, field)| {
                let key = util::fit_width(&field.key, key_width);
                let control = control_text(field);
                if focused && idx == panel.focused_field {
                    let text = format!("{key}  {control}");
                    return Line::from(Span::styled(util::fit_width(&text, width), focus_style));
                }
                Line::from(vec![
                    Span::styled(key, key_style),
                    Span::raw("  "),
                    Span::raw(control),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
