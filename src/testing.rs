//! Shared fixtures for unit tests

use crate::catalog::Product;

/// Build a product with the given name and compatible cars
///
/// The remaining fields get stable defaults so tests only spell out what
/// they assert on.
#[must_use]
pub fn product(name: &str, cars: &[&str]) -> Product {
    Product {
        name: name.to_string(),
        image: format!("/images/{}.png", name.to_lowercase().replace(' ', "-")),
        model: "P100".to_string(),
        treadwear: 400,
        traction: "A".to_string(),
        temperature: "B".to_string(),
        pattern: "Symmetric".to_string(),
        load_index: "91".to_string(),
        speed_rating: "H".to_string(),
        cars: cars.iter().map(ToString::to_string).collect(),
    }
}
