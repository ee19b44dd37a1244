//! Terminal user interface layer
//!
//! Hosts the ratatui-based interactive catalog browser and the message
//! level vocabulary shared between its widgets.

pub mod tui;

/// Message level for categorizing status output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Warning message
    Warning,
    /// Info message
    Info,
}
