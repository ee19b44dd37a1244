//! Ratatui-based catalog browser
//!
//! This module implements the interactive screen: a search bar on top, a
//! scrollable column of product cards, and a status line. Filtering is
//! recomputed synchronously on every keystroke; the catalog fetch runs on
//! a worker thread and lands in the state when its channel delivers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 app::run                    │
//! │      (terminal setup + draw/event loop)     │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │ (filtering)│ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod app;
mod events;
mod state;
mod theme;
mod widgets;

pub use app::run;
pub use state::AppState;
pub use theme::Theme;
