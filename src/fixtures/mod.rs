// fixtures/mod.rs - Test fixtures module
//
// Canned Open Food Facts responses and sample products. Tests decode the
// payloads through the real envelope types, so a fixture doubles as a check
// that the lenient deserializers accept what the API actually sends.

pub mod payloads;

use serde::de::DeserializeOwned;

use crate::web_app::model::Product;

/// A recorded API response body
pub trait ApiPayload {
    /// Raw JSON as the API returns it
    fn body() -> &'static str;

    /// The body decoded into the given envelope type.
    fn decode<T: DeserializeOwned>() -> Result<T, serde_json::Error> {
        serde_json::from_str(Self::body())
    }
}

/// Minimal product summary with a name and a grade.
pub fn product(code: &str, name: Option<&str>, grade: Option<&str>) -> Product {
    Product {
        code: Some(code.to_string()),
        product_name: name.map(str::to_string),
        nutrition_grades: grade.map(str::to_string),
        ..Product::default()
    }
}

/// `count` distinct products whose codes start at `first`.
pub fn page_of(first: u32, count: u32) -> Vec<Product> {
    (first..first + count)
        .map(|n| product(&n.to_string(), Some(&format!("Product {}", n)), Some("c")))
        .collect()
}
