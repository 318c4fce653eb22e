use super::{util, Workbench, HEADER_HEIGHT, STATUS_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

mod dialogs;
mod panel;
mod status;
mod tree;

pub(super) fn render(workbench: &mut Workbench, frame: &mut Frame, area: Rect) {
    workbench.last_render_area = Some(area);
    if area.width == 0 || area.height == 0 {
        workbench.last_tree_area = None;
        workbench.last_panel_area = None;
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    workbench.render_header(frame, rows[0]);

    let body = rows[1];
    if workbench.store.state().panel.is_some() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(util::tree_width(body.width)),
                Constraint::Min(0),
            ])
            .split(body);
        workbench.render_tree(frame, columns[0]);
        workbench.render_panel(frame, columns[1]);
    } else {
        workbench.render_tree(frame, body);
        workbench.last_panel_area = None;
    }

    workbench.render_status(frame, rows[2]);

    dialogs::render_quick_pick(workbench, frame, area);
    dialogs::render_input_dialog(workbench, frame, area);
}

pub(super) fn cursor_position(workbench: &Workbench) -> Option<(u16, u16)> {
    dialogs::input_dialog_cursor(workbench)
}
