//! Free-text product search
//!
//! Provides the query-to-terms split and the substring matching used by
//! both the one-shot search command and the interactive browser.

pub mod filter;

pub use filter::{ProductFilterExt, by_query, matches_terms, matching_indices, query_terms};
