// fixtures/payloads.rs - Recorded API responses
//
// Trimmed copies of real responses, including the quirks the model has to
// tolerate: numeric ids, missing fields, numbers sent as strings and
// malformed category entries.

use super::ApiPayload;

/// `GET /category/snacks.json?page=1`
pub struct SnacksPage;

impl ApiPayload for SnacksPage {
    fn body() -> &'static str {
        r#"{
            "count": 3,
            "page": 1,
            "page_size": 24,
            "products": [
                {
                    "id": "3017620422003",
                    "code": "3017620422003",
                    "product_name": "Nutella",
                    "categories": "Spreads, Sweet spreads, Hazelnut spreads",
                    "nutrition_grades": "e",
                    "image_url": "https://images.openfoodfacts.org/images/products/301/762/042/2003/front_en.jpg",
                    "ingredients_hierarchy": ["en:sugar", "en:palm-oil", "en:hazelnut"]
                },
                {
                    "code": 7622210449283,
                    "product_name": "Prince Chocolat",
                    "nutrition_grades": "d"
                },
                {
                    "id": "5449000000996",
                    "categories": "Beverages"
                }
            ]
        }"#
    }
}

/// `GET /cgi/search.pl?search_terms=zzzz&page=1&json=true` with no hits
pub struct EmptySearchPage;

impl ApiPayload for EmptySearchPage {
    fn body() -> &'static str {
        r#"{"count": 0, "page": 1, "page_size": 24, "products": []}"#
    }
}

/// `GET /categories.json`
pub struct Categories;

impl ApiPayload for Categories {
    fn body() -> &'static str {
        r#"{
            "count": 3,
            "tags": [
                {"id": "en:snacks", "name": "Snacks", "products": 120345},
                {"id": "en:beverages", "name": "Beverages", "products": 98000},
                {"id": "fr:boissons-a-la-mangue", "name": "Boissons à la mangue"},
                "not-a-category"
            ]
        }"#
    }
}

/// `GET /api/v0/product/3017620422003.json`
pub struct ProductFound;

impl ApiPayload for ProductFound {
    fn body() -> &'static str {
        r#"{
            "code": "3017620422003",
            "status": 1,
            "status_verbose": "product found",
            "product": {
                "_id": "3017620422003",
                "id": "3017620422003",
                "code": "3017620422003",
                "product_name": "Nutella",
                "brands": "Ferrero",
                "categories": "Spreads, Sweet spreads",
                "labels": "No gluten, Vegetarian",
                "allergens": "en:milk, en:nuts, en:soybeans",
                "additives_tags": ["en:e322", "en:e322i"],
                "packaging": "Glass jar",
                "ingredients_hierarchy": ["en:sugar", "en:palm-oil", "en:hazelnut", "en:skimmed-milk-powder"],
                "nutriments": {
                    "energy": 2252,
                    "fat": 30.9,
                    "carbohydrates": "57.5",
                    "proteins": 6.3,
                    "nutrition_grade_fr": "e"
                }
            }
        }"#
    }
}

/// Lookup of a barcode the API does not know
pub struct ProductMissing;

impl ApiPayload for ProductMissing {
    fn body() -> &'static str {
        r#"{"code": "0000000000000", "status": 0, "status_verbose": "product not found"}"#
    }
}
