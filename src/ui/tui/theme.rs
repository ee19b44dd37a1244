//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the browser.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Color for the search cursor and the focused border
    pub accent: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed text (metric labels, placeholders)
    pub dimmed: Color,
    /// Color for metric values and product names
    pub value: Color,
    /// Color for compatible vehicle names
    pub car: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            accent: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
            value: Color::White,
            car: Color::Magenta,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
        }
    }

    /// Style for the search cursor and focused elements
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for metric labels
    #[must_use]
    pub fn label_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    /// Style for metric values
    #[must_use]
    pub fn value_style(&self) -> Style {
        Style::default().fg(self.value).add_modifier(Modifier::BOLD)
    }

    /// Style for product names
    #[must_use]
    pub fn name_style(&self) -> Style {
        Style::default().fg(self.value).add_modifier(Modifier::BOLD)
    }

    /// Style for compatible vehicle names
    #[must_use]
    pub fn car_style(&self) -> Style {
        Style::default().fg(self.car)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for warning messages
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for info messages
    #[must_use]
    pub fn info_style(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Style for normal status text
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }
}
