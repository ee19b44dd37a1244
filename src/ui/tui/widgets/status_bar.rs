//! Status bar widget for displaying the catalog state summary

use crate::ui::MessageLevel;
use crate::ui::tui::state::AppState;
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget showing one summary line for the current state
pub struct StatusBar<'a> {
    /// Application state
    state: &'a AppState,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> ratatui::style::Style {
        match level {
            MessageLevel::Error => self.theme.error_style(),
            MessageLevel::Warning => self.theme.warning_style(),
            MessageLevel::Info => self.theme.info_style(),
            MessageLevel::Normal => self.theme.normal_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let (text, level) = self.state.status_line();
        let style = self.style_for_level(level);
        let line = Line::from(vec![
            Span::styled(Self::prefix_for_level(level), style),
            Span::styled(text, style),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
