//! Product filtering used by search and browse
//!
//! A query is split into lowercased terms and a product is kept when every
//! term appears as a substring of the product name or of at least one
//! compatible vehicle name. Matching is case-insensitive containment, not
//! token-boundary or fuzzy matching, and the result keeps the input order.
//!
//! # Iterator Adapter
//!
//! [`ProductFilterExt`] adds fluent query filtering to product iterators:
//!
//! ```ignore
//! use pneu::search::ProductFilterExt;
//!
//! let matches = products.filter_query("eco civic");
//! ```

use crate::catalog::Product;

/// Split a raw query into lowercased search terms
///
/// The split is on single spaces by contract: the empty query produces one
/// empty term and consecutive spaces produce empty terms. An empty term is
/// contained in every string, so those queries match every product.
#[must_use]
pub fn query_terms(query: &str) -> Vec<String> {
    query.to_lowercase().split(' ').map(str::to_string).collect()
}

/// Check whether a product matches every term
///
/// A term matches when the lowercased product name contains it or any
/// lowercased entry of `cars` contains it.
#[must_use]
pub fn matches_terms(product: &Product, terms: &[String]) -> bool {
    terms.iter().all(|term| {
        product.name.to_lowercase().contains(term)
            || product
                .cars
                .iter()
                .any(|car| car.to_lowercase().contains(term))
    })
}

/// Filter products by a free-text query, preserving input order
#[must_use]
pub fn by_query(products: impl IntoIterator<Item = Product>, query: &str) -> Vec<Product> {
    let terms = query_terms(query);
    products
        .into_iter()
        .filter(|product| matches_terms(product, &terms))
        .collect()
}

/// Indices of the matching products, preserving input order
///
/// Used by the browser, which renders out of the full list by index
/// instead of cloning the matched records.
#[must_use]
pub fn matching_indices(products: &[Product], query: &str) -> Vec<usize> {
    let terms = query_terms(query);
    products
        .iter()
        .enumerate()
        .filter(|(_, product)| matches_terms(product, &terms))
        .map(|(idx, _)| idx)
        .collect()
}

/// Extension trait adding query filtering to product iterators
pub trait ProductFilterExt: IntoIterator<Item = Product> + Sized {
    /// Keep only the products matching the query, in input order
    fn filter_query(self, query: &str) -> Vec<Product> {
        by_query(self, query)
    }
}

impl<I> ProductFilterExt for I where I: IntoIterator<Item = Product> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::product;

    fn sample_catalog() -> Vec<Product> {
        vec![
            product("Eco Pro", &["Civic", "Corolla"]),
            product("Sport Max", &["Mustang"]),
            product("All Terrain X", &["Hilux", "Ranger"]),
        ]
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let catalog = sample_catalog();
        let result = by_query(catalog.clone(), "");
        assert_eq!(result, catalog);
    }

    #[test]
    fn test_single_term_matches_name() {
        let result = by_query(sample_catalog(), "sport");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Sport Max");
    }

    #[test]
    fn test_single_term_matches_car() {
        let result = by_query(sample_catalog(), "civic");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Eco Pro");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = by_query(sample_catalog(), "MUSTANG");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Sport Max");
    }

    #[test]
    fn test_substring_containment_not_whole_words() {
        // "rol" is an infix of "Corolla"
        let result = by_query(sample_catalog(), "rol");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Eco Pro");
    }

    #[test]
    fn test_multi_term_is_per_product_conjunction() {
        // "eco" matches the name, "corolla" a car of the same product
        let result = by_query(sample_catalog(), "eco corolla");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Eco Pro");

        // "pro" and "max" each match some product, but no single product
        // matches both
        let result = by_query(sample_catalog(), "pro max");
        assert!(result.is_empty());
    }

    #[test]
    fn test_terms_may_match_across_name_and_cars() {
        let result = by_query(sample_catalog(), "terrain hilux");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "All Terrain X");
    }

    #[test]
    fn test_filter_preserves_order() {
        let catalog = vec![
            product("A One", &["Civic"]),
            product("B Two", &["Golf"]),
            product("C Three", &["Civic"]),
        ];
        let result = by_query(catalog, "civic");
        let names: Vec<_> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A One", "C Three"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = by_query(sample_catalog(), "eco");
        let twice = by_query(once.clone(), "eco");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        assert!(by_query(Vec::new(), "anything").is_empty());
        assert!(by_query(Vec::new(), "").is_empty());
    }

    #[test]
    fn test_consecutive_spaces_produce_empty_terms() {
        let terms = query_terms("eco  pro");
        assert_eq!(terms, vec!["eco", "", "pro"]);

        // The empty middle term matches everything, so the query behaves
        // like "eco pro"
        let result = by_query(sample_catalog(), "eco  pro");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Eco Pro");
    }

    #[test]
    fn test_empty_query_yields_one_empty_term() {
        assert_eq!(query_terms(""), vec![String::new()]);
    }

    #[test]
    fn test_matching_indices_align_with_by_query() {
        let catalog = sample_catalog();
        let indices = matching_indices(&catalog, "civic");
        assert_eq!(indices, vec![0]);

        let indices = matching_indices(&catalog, "");
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_extension_trait_chaining() {
        let result = sample_catalog().filter_query("ranger");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "All Terrain X");
    }
}
