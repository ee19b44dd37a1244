//! Product card widget
//!
//! Renders one catalog entry as a bordered card titled with the model
//! label: the product name, the image reference, six metrics in a fixed
//! three-column grid, and the compatible vehicle list.

use crate::catalog::Product;
use crate::ui::tui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Product card widget
pub struct ProductCard<'a> {
    /// Product to render
    product: &'a Product,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> ProductCard<'a> {
    /// Total card height in rows, borders included
    pub const HEIGHT: u16 = 9;

    /// Create a new product card widget
    #[must_use]
    pub const fn new(product: &'a Product, theme: &'a Theme) -> Self {
        Self { product, theme }
    }

    /// Pad or truncate a cell to the grid column width
    fn cell(text: &str, width: usize) -> String {
        let truncated: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{truncated:<width$}")
    }

    /// Build one grid row of three equally wide cells
    fn grid_line(cells: [&str; 3], width: usize, style: Style) -> Line<'static> {
        let spans: Vec<Span> = cells
            .iter()
            .map(|text| Span::styled(Self::cell(text, width), style))
            .collect();
        Line::from(spans)
    }
}

impl Widget for ProductCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(format!(" {} ", self.product.model));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let col_width = (inner.width as usize / 3).max(1);
        let treadwear = self.product.treadwear.to_string();

        let lines = vec![
            Line::from(Span::styled(
                self.product.name.clone(),
                self.theme.name_style(),
            )),
            Line::from(Span::styled(
                format!("img {}", self.product.image),
                self.theme.dimmed_style(),
            )),
            Self::grid_line(
                ["Durability", "Traction", "Temperature"],
                col_width,
                self.theme.label_style(),
            ),
            Self::grid_line(
                [&treadwear, &self.product.traction, &self.product.temperature],
                col_width,
                self.theme.value_style(),
            ),
            Self::grid_line(
                ["Speed rating", "Load capacity", "Pattern"],
                col_width,
                self.theme.label_style(),
            ),
            Self::grid_line(
                [
                    &self.product.speed_rating,
                    &self.product.load_index,
                    &self.product.pattern,
                ],
                col_width,
                self.theme.value_style(),
            ),
            Line::from(vec![
                Span::styled("Fits: ", self.theme.dimmed_style()),
                Span::styled(self.product.cars.join(", "), self.theme.car_style()),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
