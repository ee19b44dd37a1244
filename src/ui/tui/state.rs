//! Application state for the catalog browser
//!
//! Owns the catalog fetch state, the search query, and the filtered view.
//! The query is the only mutable input; every edit recomputes the filtered
//! indices on the same event, with no debounce.

use crate::catalog::{CatalogState, FetchResult, Product};
use crate::search::filter;
use crate::ui::MessageLevel;

/// Application state for the catalog browser
#[derive(Debug)]
pub struct AppState {
    /// Catalog fetch state (loading, failed, or ready with data)
    pub catalog: CatalogState,
    /// Indices into the product list matching the current query
    pub filtered_indices: Vec<usize>,
    /// Current search query
    pub query: String,
    /// Cursor position within the query string
    pub query_cursor: usize,
    /// Scroll offset into the filtered card list, in cards
    pub scroll_offset: usize,
    /// Number of cards that fit the visible list area (set during render)
    pub visible_cards: usize,
}

impl AppState {
    /// Create new state with an optional pre-filled query
    #[must_use]
    pub fn new(initial_query: String) -> Self {
        let query_cursor = initial_query.len();
        Self {
            catalog: CatalogState::Loading,
            filtered_indices: Vec::new(),
            query: initial_query,
            query_cursor,
            scroll_offset: 0,
            visible_cards: 1,
        }
    }

    /// Install the fetch result and compute the first filtered view
    pub fn finish_fetch(&mut self, result: FetchResult) {
        self.catalog = CatalogState::from(result);
        self.refilter();
    }

    /// Products, empty unless the fetch succeeded
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Recompute the filtered indices from the current query
    ///
    /// Runs synchronously on the event that changed the query.
    pub fn refilter(&mut self) {
        self.filtered_indices = filter::matching_indices(self.products(), &self.query);
        self.scroll_offset = 0;
    }

    /// Largest scroll offset that still shows a full page where possible
    fn max_scroll(&self) -> usize {
        self.filtered_indices.len().saturating_sub(self.visible_cards)
    }

    /// Scroll the card list up by one card
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll the card list down by one card
    pub fn scroll_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 1).min(self.max_scroll());
    }

    /// Scroll up by one page of cards
    pub const fn page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(self.visible_cards);
    }

    /// Scroll down by one page of cards
    pub fn page_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + self.visible_cards).min(self.max_scroll());
    }

    /// Jump to the first card
    pub const fn jump_to_start(&mut self) {
        self.scroll_offset = 0;
    }

    /// Jump to the last page of cards
    pub fn jump_to_end(&mut self) {
        self.scroll_offset = self.max_scroll();
    }

    /// Add a character to the query at the cursor
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    /// Remove the character before the cursor (backspace)
    pub fn query_backspace(&mut self) {
        if self.query_cursor > 0 {
            let prev_char_boundary = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.query.remove(prev_char_boundary);
            self.query_cursor = prev_char_boundary;
        }
    }

    /// Delete the character under the cursor
    pub fn query_delete(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query.remove(self.query_cursor);
        }
    }

    /// Move the query cursor left by one character
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the query cursor right by one character
    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Clear the query
    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
    }

    /// Delete the word before the cursor
    pub fn query_delete_word(&mut self) {
        let trimmed = self.query[..self.query_cursor].trim_end();
        if let Some(last_space) = trimmed.rfind(' ') {
            self.query.drain(last_space + 1..self.query_cursor);
            self.query_cursor = last_space + 1;
        } else {
            self.query.drain(..self.query_cursor);
            self.query_cursor = 0;
        }
    }

    /// One-line summary of the current state for the status bar
    ///
    /// Failure is reported with a single fixed message; causes are not
    /// distinguished here.
    #[must_use]
    pub fn status_line(&self) -> (String, MessageLevel) {
        match &self.catalog {
            CatalogState::Loading => ("Fetching catalog...".to_string(), MessageLevel::Info),
            CatalogState::Failed(_) => (
                "Failed to load products.".to_string(),
                MessageLevel::Error,
            ),
            CatalogState::Ready(products) => {
                let matched = self.filtered_indices.len();
                let total = products.len();
                if self.query.is_empty() {
                    (format!("{total} product(s) in the catalog"), MessageLevel::Normal)
                } else {
                    (
                        format!("{matched} of {total} product(s) match"),
                        MessageLevel::Normal,
                    )
                }
            }
        }
    }
}
