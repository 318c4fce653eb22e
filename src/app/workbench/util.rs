use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(super) fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = area.width.saturating_mul(width_percent).saturating_div(100);
    let min_width = 30.min(area.width);
    let width = width.max(min_width).min(area.width);

    let min_height = 3.min(area.height);
    let height = height.max(min_height).min(area.height);

    let x = area.x + (area.width.saturating_sub(width) / 2);
    let y = area.y + (area.height.saturating_sub(height) / 2);

    Rect::new(x, y, width, height)
}

pub(super) fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}

/// Width of the tree column when the panel is open beside it.
pub(super) fn tree_width(available: u16) -> u16 {
    if available == 0 {
        return 0;
    }

    let desired = available
        .saturating_mul(super::TREE_WIDTH_PERCENT)
        .saturating_div(100);
    let min_width = super::TREE_MIN_WIDTH.min(available);
    let max_width = available.saturating_sub(20).max(min_width);

    desired.max(min_width).min(max_width)
}

pub(super) fn inner(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// Byte window `[start, end)` of `text` that fits `width` cells and keeps the
/// byte `cursor` visible.
pub(super) fn input_window(text: &str, cursor: usize, width: usize) -> (usize, usize) {
    let mut cursor = cursor.min(text.len());
    while cursor > 0 && !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    if width == 0 || text.is_empty() {
        return (cursor, cursor);
    }

    // Reserve one cell for the caret when it sits past the last char.
    let budget = if cursor == text.len() { width.saturating_sub(1).max(1) } else { width };
    let mut start = 0;
    if text[..cursor].width() >= budget {
        let mut used = 0;
        start = cursor;
        for (idx, ch) in text[..cursor].char_indices().rev() {
            let w = ch.width().unwrap_or(0);
            if used + w >= budget {
                break;
            }
            used += w;
            start = idx;
        }
    }

    let mut used = 0;
    let mut end = start;
    for (idx, ch) in text[start..].char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        end = start + idx + ch.len_utf8();
    }
    (start, end)
}

/// Pads or truncates `text` to exactly `width` cells.
pub(super) fn fit_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}
