//! Card list widget for displaying filtered products
//!
//! Renders a scrollable column of product cards, or a single placeholder
//! line while the catalog is loading, failed, or has no matches.

use super::product_card::ProductCard;
use crate::catalog::CatalogState;
use crate::ui::tui::state::AppState;
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Loading indicator text
pub const LOADING: &str = "Loading products...";

/// Fixed message for any fetch failure; causes are not distinguished
pub const FETCH_ERROR: &str = "Failed to load products.";

/// Placeholder when the filtered list is empty
pub const NO_RESULTS: &str = "No products found";

/// Card list widget that displays the filtered products
pub struct CardList<'a> {
    /// Application state
    state: &'a AppState,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
}

impl<'a> CardList<'a> {
    /// Create a new card list widget
    #[must_use]
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        let filtered = state.filtered_indices.len();
        let total = state.products().len();
        let title = format!(" Products ({filtered}/{total}) ");

        Self {
            state,
            theme,
            title,
        }
    }

    /// Render a single centered placeholder line
    fn render_placeholder(text: &str, style: Style, inner: Rect, buf: &mut Buffer) {
        if inner.height == 0 {
            return;
        }
        let line = Rect {
            y: inner.y + inner.height / 2,
            height: 1,
            ..inner
        };
        Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .render(line, buf);
    }
}

impl Widget for CardList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        match &self.state.catalog {
            CatalogState::Loading => {
                Self::render_placeholder(LOADING, self.theme.dimmed_style(), inner, buf);
            }
            CatalogState::Failed(_) => {
                Self::render_placeholder(FETCH_ERROR, self.theme.error_style(), inner, buf);
            }
            CatalogState::Ready(products) => {
                if self.state.filtered_indices.is_empty() {
                    Self::render_placeholder(NO_RESULTS, self.theme.dimmed_style(), inner, buf);
                    return;
                }

                // Stack cards from the scroll offset down, clipping the last
                let mut y = inner.y;
                for &product_idx in self.state.filtered_indices.iter().skip(self.state.scroll_offset)
                {
                    let remaining = inner.bottom().saturating_sub(y);
                    if remaining == 0 {
                        break;
                    }
                    let Some(product) = products.get(product_idx) else {
                        break;
                    };

                    let card_area = Rect {
                        x: inner.x,
                        y,
                        width: inner.width,
                        height: ProductCard::HEIGHT.min(remaining),
                    };
                    ProductCard::new(product, self.theme).render(card_area, buf);
                    y += ProductCard::HEIGHT;
                }
            }
        }
    }
}
