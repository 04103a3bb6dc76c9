// web_app/routes.rs - Navigable locations

/// Root listing
pub const LISTING_PATH: &str = "/";

/// Detail page of one product, keyed by its identifier.
pub fn product_path(id: &str) -> String {
    format!("/product/{}", id.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_path() {
        assert_eq!(product_path("3017620422003"), "/product/3017620422003");
        assert_eq!(product_path(" 42 "), "/product/42");
    }
}
