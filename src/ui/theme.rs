use ratatui::style::Color;

use crate::theme::Theme;

/// Colors the renderer uses for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Title badge background
    pub primary: Color,
    /// Borders and section titles
    pub secondary: Color,
    /// Celebration text
    pub success: Color,
    /// Countdown gauge
    pub active: Color,
    pub warn: Color,
    /// Selection marker/arrow
    pub highlight: Color,
    /// Dimmed/inactive text
    pub dim: Color,
    pub text: Color,
    pub background: Color,
    /// Numbers and counts
    pub accent: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    fn light() -> Self {
        Self {
            primary: Color::Magenta,
            secondary: Color::Blue,
            success: Color::Green,
            active: Color::LightMagenta,
            warn: Color::Rgb(200, 120, 0),
            highlight: Color::Blue,
            dim: Color::Gray,
            text: Color::Black,
            background: Color::White,
            accent: Color::Magenta,
        }
    }

    fn dark() -> Self {
        Self {
            primary: Color::Magenta,
            secondary: Color::Cyan,
            success: Color::LightGreen,
            active: Color::LightGreen,
            warn: Color::Yellow,
            highlight: Color::Cyan,
            dim: Color::DarkGray,
            text: Color::White,
            background: Color::Black,
            accent: Color::LightBlue,
        }
    }
}
