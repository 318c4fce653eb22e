use super::super::{util, Workbench};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const QUICK_PICK_MAX_ROWS: u16 = 10;
const PREFIX: &str = "> ";

fn quick_pick_area(area: Rect, rows: u16) -> Rect {
    // Title, filter line, items, hint plus the border.
    util::centered_rect(50, rows.saturating_add(5), area)
}

fn input_dialog_area(area: Rect) -> Rect {
    util::centered_rect(60, 6, area)
}

pub(super) fn render_quick_pick(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let pick = &workbench.store.state().ui.quick_pick;
    if !pick.visible {
        return;
    }

    let items = pick.filtered();
    let rows = u16::try_from(items.len())
        .unwrap_or(u16::MAX)
        .clamp(1, QUICK_PICK_MAX_ROWS);
    let popup_area = quick_pick_area(area, rows);
    if popup_area.width < 10 || popup_area.height < 4 {
        return;
    }

    frame.render_widget(Clear, popup_area);

    let base_style = Style::default()
        .bg(workbench.theme.palette_bg)
        .fg(workbench.theme.palette_fg);
    let muted_style = Style::default().fg(workbench.theme.muted_fg);
    let selected_style = Style::default()
        .bg(workbench.theme.selected_bg)
        .fg(workbench.theme.selected_fg);

    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(workbench.theme.palette_border))
            .style(base_style),
        popup_area,
    );

    let inner = util::inner(popup_area);
    if inner.width == 0 || inner.height < 2 {
        return;
    }
    let width = usize::from(inner.width);

    let mut lines = vec![
        Line::from(Span::styled(
            pick.title.as_str(),
            Style::default()
                .fg(workbench.theme.header_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(PREFIX, Style::default().fg(workbench.theme.accent_fg)),
            Span::raw(pick.filter.as_str()),
        ]),
    ];

    if items.is_empty() {
        lines.push(Line::from(Span::styled("No matches", muted_style)));
    } else {
        let visible = usize::from(rows);
        let first = pick.selected.saturating_sub(visible - 1);
        for (idx, item) in items.iter().enumerate().skip(first).take(visible) {
            if idx == pick.selected {
                let text = format!("▸ {item}");
                lines.push(Line::from(Span::styled(
                    util::fit_width(&text, width),
                    selected_style,
                )));
            } else {
                lines.push(Line::from(format!("  {item}")));
            }
        }
    }

    lines.push(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(workbench.theme.accent_fg)),
        Span::raw(" Pick  "),
        Span::styled("[Esc]", muted_style),
        Span::raw(" Cancel"),
    ]));

    frame.render_widget(Paragraph::new(lines).style(base_style), inner);
}

pub(super) fn render_input_dialog(workbench: &Workbench, frame: &mut Frame, area: Rect) {
    let dialog = &workbench.store.state().ui.input_dialog;
    if !dialog.visible {
        return;
    }

    let popup_area = input_dialog_area(area);
    if popup_area.width < 20 || popup_area.height < 5 {
        return;
    }

    frame.render_widget(Clear, popup_area);

    let base_style = Style::default()
        .bg(workbench.theme.palette_bg)
        .fg(workbench.theme.palette_fg);
    let muted_style = Style::default().fg(workbench.theme.muted_fg);

    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(workbench.theme.palette_border))
            .style(base_style),
        popup_area,
    );

    let inner = util::inner(popup_area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let title = if dialog.title.is_empty() {
        "Input"
    } else {
        dialog.title.as_str()
    };
    let title_style = Style::default()
        .fg(workbench.theme.header_fg)
        .add_modifier(Modifier::BOLD);

    let prefix_w = PREFIX.width() as u16;
    let (start, end) = util::input_window(
        &dialog.value,
        dialog.cursor,
        usize::from(inner.width.saturating_sub(prefix_w)),
    );
    let visible_value = dialog.value.get(start..end).unwrap_or_default();

    let mut lines = vec![
        Line::from(Span::styled(title, title_style)),
        Line::from(vec![
            Span::styled(PREFIX, Style::default().fg(workbench.theme.accent_fg)),
            Span::raw(visible_value),
        ]),
    ];

    match dialog.error.as_deref() {
        Some(err) => lines.push(Line::from(Span::styled(
            err,
            Style::default().fg(workbench.theme.error_fg),
        ))),
        None => lines.push(Line::raw("")),
    }

    lines.push(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(workbench.theme.accent_fg)),
        Span::raw(" OK  "),
        Span::styled("[Esc]", muted_style),
        Span::raw(" Cancel"),
    ]));

    frame.render_widget(Paragraph::new(lines).style(base_style), inner);
}

pub(super) fn input_dialog_cursor(workbench: &Workbench) -> Option<(u16, u16)> {
    let area = workbench.last_render_area?;
    let dialog = &workbench.store.state().ui.input_dialog;
    if !dialog.visible {
        return None;
    }

    let popup_area = input_dialog_area(area);
    if popup_area.width < 20 || popup_area.height < 5 {
        return None;
    }

    let inner = util::inner(popup_area);
    if inner.width == 0 || inner.height < 2 {
        return None;
    }

    let prefix_w = PREFIX.width() as u16;
    let cursor = dialog.cursor.min(dialog.value.len());
    let (start, _end) = util::input_window(
        &dialog.value,
        cursor,
        usize::from(inner.width.saturating_sub(prefix_w)),
    );
    let before = dialog.value.get(start..cursor).unwrap_or_default();
    let before_w = u16::try_from(before.width()).unwrap_or(u16::MAX);

    let x = inner
        .x
        .saturating_add(prefix_w)
        .saturating_add(before_w)
        .min(inner.x + inner.width.saturating_sub(1));
    // Title line is at inner.y, input line is at inner.y + 1.
    let y = inner.y.saturating_add(1);

    Some((x, y))
}
