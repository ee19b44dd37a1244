//! Pneu - a terminal browser for a tire product catalog
//!
//! This library fetches a product list from a catalog HTTP API, filters it
//! by free-text queries matching product names and compatible vehicle
//! names, and renders the results either as a one-shot listing or as an
//! interactive card browser.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod search;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PneuError {
    /// Catalog fetch or decode error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
