//! Ratatui widgets for the catalog browser
//!
//! Custom widgets for rendering the search bar, product cards, and the
//! surrounding chrome.

mod card_list;
mod help_bar;
mod product_card;
mod search_bar;
mod status_bar;

pub use card_list::CardList;
pub use help_bar::{HelpBar, KeyHint};
pub use product_card::ProductCard;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
