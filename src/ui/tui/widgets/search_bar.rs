//! Search bar widget for query input

use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Placeholder shown while the query is empty
const PLACEHOLDER: &str = "type a product or vehicle name";

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Cursor position in the query
    cursor: usize,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, cursor: usize, theme: &'a Theme) -> Self {
        Self {
            query,
            cursor,
            theme,
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.accent_style())
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![
            Span::styled("/", self.theme.dimmed_style()),
            Span::raw(" "),
        ];

        if self.query.is_empty() {
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
            spans.push(Span::styled(PLACEHOLDER, self.theme.dimmed_style()));
        } else {
            // Split query at cursor position
            let (before, after) = self.query.split_at(self.cursor);
            spans.push(Span::raw(before));
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
            spans.push(Span::raw(after));
        }

        let line = Line::from(spans);
        Paragraph::new(line).render(inner, buf);
    }
}
