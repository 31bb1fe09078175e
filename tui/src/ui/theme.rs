use ratatui::style::{Color, Modifier, Style};

/// Blue/indigo card on a dark background, red and green for churn risk.
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(12, 18, 38);
    pub const FG: Color = Color::Rgb(235, 240, 255);
    pub const FG_DIM: Color = Color::Rgb(170, 185, 225);
    pub const FG_MUTED: Color = Color::Rgb(95, 105, 140);

    pub const ACCENT_BLUE: Color = Color::Rgb(96, 165, 250);
    pub const ACCENT_INDIGO: Color = Color::Rgb(99, 102, 241);
    pub const RISK_HIGH: Color = Color::Rgb(239, 68, 68);
    pub const RISK_LOW: Color = Color::Rgb(34, 197, 94);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Border of the focused input.
    pub fn border_active() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Self::FG)
            .bg(Self::ACCENT_INDIGO)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(Self::FG_DIM).bg(Color::Rgb(60, 64, 80))
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::RISK_HIGH)
            .add_modifier(Modifier::BOLD)
    }

    /// Foreground for a churn verdict.
    pub fn risk(high: bool) -> Style {
        let fg = if high { Self::RISK_HIGH } else { Self::RISK_LOW };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }
}
