//! Catalog-specific error types
//!
//! These errors keep the failure causes apart for logging and tests; the
//! interactive UI collapses all of them into one fixed message.

use thiserror::Error;

/// Errors raised while fetching or decoding the product catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (connection, TLS, redirect loop)
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("API returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not a JSON array of products
    #[error("Invalid product payload: {0}")]
    Decode(#[source] serde_json::Error),
}
