//! Product record as served by the catalog API
//!
//! The API speaks camelCase JSON; the serde rename keeps the Rust side
//! idiomatic while matching the wire format exactly.

use serde::{Deserialize, Serialize};

/// A tire product with descriptive and performance attributes plus the
/// vehicles it fits
///
/// The fetched list is immutable for the lifetime of a session. `name` is
/// the rendering identity key and is assumed unique; duplicates are
/// undefined behavior for identity only, never for filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Display name, also the primary search key
    pub name: String,
    /// URL or path of the product image
    pub image: String,
    /// Short model label
    pub model: String,
    /// UTQG treadwear (durability) rating
    pub treadwear: u32,
    /// Traction grade
    pub traction: String,
    /// Temperature grade
    pub temperature: String,
    /// Tread pattern name
    pub pattern: String,
    /// Load capacity code (JSON `loadIndex`)
    pub load_index: String,
    /// Speed capability code (JSON `speedRating`)
    pub speed_rating: String,
    /// Compatible vehicle names, searchable alongside the product name
    pub cars: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "name": "Eco Pro",
        "image": "/images/eco-pro.png",
        "model": "EP200",
        "treadwear": 400,
        "traction": "A",
        "temperature": "B",
        "pattern": "Symmetric",
        "loadIndex": "91",
        "speedRating": "H",
        "cars": ["Civic", "Corolla"]
    }"#;

    #[test]
    fn test_deserialize_camel_case_payload() {
        let product: Product = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(product.name, "Eco Pro");
        assert_eq!(product.model, "EP200");
        assert_eq!(product.treadwear, 400);
        assert_eq!(product.load_index, "91");
        assert_eq!(product.speed_rating, "H");
        assert_eq!(product.cars, vec!["Civic", "Corolla"]);
    }

    #[test]
    fn test_serialize_uses_camel_case_keys() {
        let product: Product = serde_json::from_str(SAMPLE).unwrap();
        let value = serde_json::to_value(&product).unwrap();

        assert!(value.get("loadIndex").is_some());
        assert!(value.get("speedRating").is_some());
        assert!(value.get("load_index").is_none());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let truncated = r#"{"name": "Eco Pro", "image": "x", "model": "EP200"}"#;
        assert!(serde_json::from_str::<Product>(truncated).is_err());
    }

    #[test]
    fn test_fractional_treadwear_is_rejected() {
        let malformed = SAMPLE.replace("400", "400.5");
        assert!(serde_json::from_str::<Product>(&malformed).is_err());
    }
}
