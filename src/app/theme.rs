//! UI 主题：把颜色集中管理，避免散落在渲染代码里。

use ratatui::style::Color;

use crate::kernel::IconVariant;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub header_fg: Color,
    pub accent_fg: Color,
    pub muted_fg: Color,
    pub error_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub palette_border: Color,
    pub palette_bg: Color,
    pub palette_fg: Color,
}

impl UiTheme {
    /// Palette matching the icon variant the user chose for the terminal.
    pub fn for_variant(variant: IconVariant) -> Self {
        match variant {
            IconVariant::Dark => Self::default(),
            IconVariant::Light => Self {
                header_fg: Color::Indexed(4),    // Blue
                accent_fg: Color::Indexed(5),    // Magenta
                selected_bg: Color::Indexed(7),  // Gray
                selected_fg: Color::Indexed(0),  // Black
                palette_border: Color::Indexed(4),
                palette_fg: Color::Indexed(0),
                ..Self::default()
            },
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Indexed(6),    // Cyan
            inactive_border: Color::Indexed(8), // DarkGray
            header_fg: Color::Indexed(6),       // Cyan
            accent_fg: Color::Indexed(3),       // Yellow
            muted_fg: Color::Indexed(8),        // DarkGray
            error_fg: Color::Indexed(1),        // Red
            selected_bg: Color::Indexed(8),     // DarkGray
            selected_fg: Color::Indexed(15),    // White
            palette_border: Color::Indexed(6),  // Cyan
            palette_bg: Color::Reset,
            palette_fg: Color::Indexed(15), // White
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
