// web_app/model/mod.rs - Shared data models for the catalog viewer
//
// These structs mirror the JSON returned by the Open Food Facts API.
// Every field is optional: the API omits whatever a contributor never filled
// in, and occasionally sends numbers where strings are expected.

use serde::{Deserialize, Serialize};

pub mod detail;
pub mod listing;
pub mod sort;

pub use detail::DetailState;
pub use listing::{FetchRequest, ListingEvent, ListingState, PageQuery, QuerySource, QueryState};
pub use sort::sorted;

/// Product summary as it appears in search and category pages
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub categories: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub nutrition_grades: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_strings")]
    pub ingredients_hierarchy: Option<Vec<String>>,
}

impl Product {
    /// Key used both for the detail route and for the single-product lookup.
    pub fn identifier(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or(self.code.as_deref())
            .filter(|id| !id.trim().is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        self.product_name.as_deref()
    }

    pub fn nutrition_grade(&self) -> Option<&str> {
        self.nutrition_grades.as_deref()
    }
}

/// Full product as returned by the single-product endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default)]
    pub nutriments: Option<Nutriments>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub labels: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub brands: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub allergens: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub additives: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_strings")]
    pub additives_tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub packaging: Option<String>,
}

impl ProductDetail {
    /// Grade from the product itself, falling back to the one stored with
    /// the nutriments by older records.
    pub fn nutrition_grade(&self) -> Option<&str> {
        self.product.nutrition_grade().or_else(|| {
            self.nutriments
                .as_ref()
                .and_then(|n| n.nutrition_grade_fr.as_deref())
        })
    }
}

impl From<ProductDetail> for Product {
    fn from(detail: ProductDetail) -> Self {
        detail.product
    }
}

/// Nutrient quantities per 100g
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutriments {
    #[serde(default)]
    pub energy: Option<Quantity>,
    #[serde(default)]
    pub fat: Option<Quantity>,
    #[serde(default)]
    pub carbohydrates: Option<Quantity>,
    #[serde(default)]
    pub proteins: Option<Quantity>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub nutrition_grade_fr: Option<String>,
}

/// A nutrient amount; the API sends either a JSON number or a string
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Number(n) => write!(f, "{}", n),
            Quantity::Text(s) => write!(f, "{}", s.trim()),
        }
    }
}

/// Category as listed by the category catalog
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
}

impl Category {
    /// Path segment used by the category listing (`en:snacks` -> `snacks`).
    pub fn slug(&self) -> &str {
        let id = if self.id.is_empty() { &self.name } else { &self.id };
        strip_language_prefix(id)
    }
}

/// Drops a two-letter language tag such as `en:` or `fr:`.
pub fn strip_language_prefix(value: &str) -> &str {
    match value.split_once(':') {
        Some((tag, rest)) if tag.len() == 2 && tag.chars().all(|c| c.is_ascii_alphabetic()) => rest,
        _ => value,
    }
}

/// Sort directive applied to the in-memory listing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    NameAsc,
    NameDesc,
    GradeAsc,
    GradeDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::GradeAsc,
        SortOption::GradeDesc,
    ];

    /// Stable value used in the `<select>` element.
    pub fn as_value(self) -> &'static str {
        match self {
            SortOption::NameAsc => "name_asc",
            SortOption::NameDesc => "name_desc",
            SortOption::GradeAsc => "nutrition_grade_asc",
            SortOption::GradeDesc => "nutrition_grade_desc",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.as_value() == value)
    }

    pub fn is_descending(self) -> bool {
        matches!(self, SortOption::NameDesc | SortOption::GradeDesc)
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOption::NameAsc => write!(f, "Name (A - Z)"),
            SortOption::NameDesc => write!(f, "Name (Z - A)"),
            SortOption::GradeAsc => write!(f, "Grade Ascending"),
            SortOption::GradeDesc => write!(f, "Grade Descending"),
        }
    }
}

/// `{ "products": [...] }` envelope of search and category pages
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductPage {
    #[serde(default, deserialize_with = "lenient::opt_vec")]
    pub products: Option<Vec<Product>>,
}

impl ProductPage {
    pub fn into_products(self) -> Vec<Product> {
        self.products.unwrap_or_default()
    }
}

/// `{ "tags": [...] }` envelope of the category catalog
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CategoryCatalog {
    #[serde(default, deserialize_with = "lenient::opt_vec")]
    pub tags: Option<Vec<Category>>,
}

impl CategoryCatalog {
    /// Categories that can be selected: one per slug, blank slugs dropped.
    ///
    /// The slug is the selector value, so two entries sharing it could not be
    /// told apart anyway; the first one wins.
    pub fn into_categories(self) -> Vec<Category> {
        let mut seen = std::collections::HashSet::new();
        self.tags
            .unwrap_or_default()
            .into_iter()
            .filter(|category| {
                let slug = category.slug().trim().to_string();
                if slug.is_empty() {
                    tracing::warn!(?category, "skipping category without id or name");
                    return false;
                }
                seen.insert(slug)
            })
            .collect()
    }
}

/// `{ "status": 0|1, "product": {...} }` envelope of the single-product endpoint
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductLookup {
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default)]
    pub product: Option<ProductDetail>,
}

impl ProductLookup {
    /// `None` when the API reports the barcode as unknown.
    pub fn into_product(self) -> Option<ProductDetail> {
        let not_found = self
            .status
            .as_ref()
            .and_then(|s| s.as_i64().or_else(|| s.as_str().and_then(|s| s.parse().ok())))
            == Some(0);
        if not_found {
            None
        } else {
            self.product
        }
    }
}

mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Value>::deserialize(deserializer)?.and_then(text))
    }

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(opt_string(deserializer)?.unwrap_or_default())
    }

    pub fn opt_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Array(items)) => Some(items.into_iter().filter_map(text).collect()),
            _ => None,
        })
    }

    /// Keeps the entries that decode and skips the malformed ones.
    pub fn opt_vec<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Array(items)) => Some(
                items
                    .into_iter()
                    .filter_map(|item| match serde_json::from_value(item) {
                        Ok(value) => Some(value),
                        Err(err) => {
                            tracing::warn!(%err, "skipping malformed entry");
                            None
                        }
                    })
                    .collect(),
            ),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_option_default() {
        assert_eq!(SortOption::default(), SortOption::NameAsc);
    }

    #[test]
    fn test_sort_option_values_round_trip() {
        for opt in SortOption::ALL {
            assert_eq!(SortOption::from_value(opt.as_value()), Some(opt));
        }
        assert_eq!(SortOption::from_value("price_asc"), None);
    }

    #[test]
    fn test_sort_option_display() {
        assert_eq!(SortOption::NameAsc.to_string(), "Name (A - Z)");
        assert_eq!(SortOption::GradeDesc.to_string(), "Grade Descending");
    }

    #[test]
    fn test_identifier_prefers_id_over_code() {
        let product = Product {
            id: Some("123".to_string()),
            code: Some("456".to_string()),
            ..Default::default()
        };
        assert_eq!(product.identifier(), Some("123"));

        let product = Product {
            code: Some("456".to_string()),
            ..Default::default()
        };
        assert_eq!(product.identifier(), Some("456"));

        let product = Product {
            id: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(product.identifier(), None);
    }

    #[test]
    fn test_numeric_fields_become_strings() {
        let product: Product =
            serde_json::from_str(r#"{"code": 3017620422003, "product_name": "Nutella"}"#).unwrap();
        assert_eq!(product.code.as_deref(), Some("3017620422003"));
        assert_eq!(product.name(), Some("Nutella"));
    }

    #[test]
    fn test_null_and_missing_fields_are_none() {
        let product: Product = serde_json::from_str(r#"{"product_name": null}"#).unwrap();
        assert_eq!(product, Product::default());
    }

    #[test]
    fn test_quantity_accepts_number_or_text() {
        let n: Nutriments =
            serde_json::from_str(r#"{"energy": 2252, "fat": "30.9", "proteins": 6.3}"#).unwrap();
        assert_eq!(n.energy.unwrap().to_string(), "2252");
        assert_eq!(n.fat.unwrap().to_string(), "30.9");
        assert_eq!(n.proteins.unwrap().to_string(), "6.3");
        assert!(n.carbohydrates.is_none());
    }

    #[test]
    fn test_detail_grade_falls_back_to_nutriments() {
        let detail: ProductDetail =
            serde_json::from_str(r#"{"nutriments": {"nutrition_grade_fr": "e"}}"#).unwrap();
        assert_eq!(detail.nutrition_grade(), Some("e"));

        let detail: ProductDetail = serde_json::from_str(
            r#"{"nutrition_grades": "b", "nutriments": {"nutrition_grade_fr": "e"}}"#,
        )
        .unwrap();
        assert_eq!(detail.nutrition_grade(), Some("b"));
    }

    #[test]
    fn test_category_slug() {
        let category = Category {
            id: "en:plant-based-foods".to_string(),
            name: "Plant-based foods".to_string(),
        };
        assert_eq!(category.slug(), "plant-based-foods");

        let category = Category {
            id: String::new(),
            name: "snacks".to_string(),
        };
        assert_eq!(category.slug(), "snacks");
    }

    #[test]
    fn test_strip_language_prefix() {
        assert_eq!(strip_language_prefix("en:milk"), "milk");
        assert_eq!(strip_language_prefix("fr:lait"), "lait");
        assert_eq!(strip_language_prefix("milk"), "milk");
        assert_eq!(strip_language_prefix("abc:milk"), "abc:milk");
    }

    #[test]
    fn test_lookup_status_zero_is_not_found() {
        let lookup: ProductLookup =
            serde_json::from_str(r#"{"status": 0, "status_verbose": "product not found"}"#).unwrap();
        assert!(lookup.into_product().is_none());

        let lookup: ProductLookup =
            serde_json::from_str(r#"{"status": 1, "product": {"product_name": "Oat bar"}}"#).unwrap();
        assert_eq!(
            lookup.into_product().unwrap().product.name(),
            Some("Oat bar")
        );
    }

    #[test]
    fn test_catalog_keeps_one_category_per_slug() {
        let catalog: CategoryCatalog = serde_json::from_str(
            r#"{"tags": [
                {"id": "en:snacks", "name": "Snacks"},
                {"id": "fr:snacks", "name": "Snacks (fr)"},
                {"name": ""},
                {"id": "en:beverages", "name": "Beverages"}
            ]}"#,
        )
        .unwrap();
        let categories = catalog.into_categories();
        let slugs: Vec<&str> = categories.iter().map(Category::slug).collect();
        assert_eq!(slugs, vec!["snacks", "beverages"]);
        assert_eq!(categories[0].name, "Snacks");
    }

    #[test]
    fn test_page_skips_malformed_products() {
        let page: ProductPage =
            serde_json::from_str(r#"{"products": [{"product_name": "A"}, 42, {"product_name": "B"}]}"#)
                .unwrap();
        let names: Vec<_> = page
            .into_products()
            .into_iter()
            .filter_map(|p| p.product_name)
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
