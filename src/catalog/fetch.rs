//! Catalog retrieval over HTTP
//!
//! One GET per browse session, no retry, no caching. The request runs on
//! a worker thread and reports back over a channel so the event loop
//! never blocks on the network.

use super::error::CatalogError;
use super::product::Product;
use reqwest::blocking::Client;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Outcome of a catalog fetch
pub type FetchResult = Result<Vec<Product>, CatalogError>;

/// Consumer-visible state of the catalog
///
/// Exactly one case holds at any time; data and an error can never be
/// present together.
#[derive(Debug)]
pub enum CatalogState {
    /// Request in flight, nothing to show yet
    Loading,
    /// The request or the decode failed
    Failed(CatalogError),
    /// Products arrived in API order, possibly empty
    Ready(Vec<Product>),
}

impl CatalogState {
    /// Products, if the fetch has completed successfully
    ///
    /// Loading and failed states expose an empty slice so that consumers
    /// can filter and render uniformly.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Ready(products) => products,
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    /// Whether the fetch is still outstanding
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl From<FetchResult> for CatalogState {
    fn from(result: FetchResult) -> Self {
        match result {
            Ok(products) => Self::Ready(products),
            Err(e) => Self::Failed(e),
        }
    }
}

/// HTTP client for the product catalog
pub struct CatalogClient {
    base_url: String,
    client: Client,
}

impl CatalogClient {
    /// Path of the product list endpoint, relative to the base URL
    pub const PRODUCTS_PATH: &'static str = "/api/products";

    /// Create a client for the given API base URL
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// The base URL this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full product list
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the request fails, the server answers
    /// with a non-success status, or the body does not decode as a JSON
    /// array of products.
    pub fn fetch_products(&self) -> FetchResult {
        let url = format!("{}{}", self.base_url, Self::PRODUCTS_PATH);

        let response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(CatalogError::Decode)
    }
}

/// Start the one-shot catalog fetch on a worker thread
///
/// The result arrives on the returned channel. If the receiver is dropped
/// before the fetch completes the late result is discarded by the failed
/// send; the worker does not panic and no state is updated.
#[must_use]
pub fn spawn_fetch(client: CatalogClient) -> Receiver<FetchResult> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(client.fetch_products());
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::product;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = CatalogClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_state_products_accessor() {
        let ready = CatalogState::Ready(vec![product("Eco Pro", &["Civic"])]);
        assert_eq!(ready.products().len(), 1);

        assert!(CatalogState::Loading.products().is_empty());
        assert!(CatalogState::Loading.is_loading());
    }

    #[test]
    fn test_state_from_fetch_result() {
        let ok: FetchResult = Ok(vec![]);
        assert!(matches!(CatalogState::from(ok), CatalogState::Ready(_)));

        let err: FetchResult = Err(CatalogError::Status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        ));
        assert!(matches!(CatalogState::from(err), CatalogState::Failed(_)));
    }
}
