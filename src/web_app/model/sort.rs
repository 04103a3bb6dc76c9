// web_app/model/sort.rs - Client-side ordering of the listing

use std::cmp::Ordering;

use super::{Product, SortOption};

/// Returns a sorted copy of `products`; the input keeps its fetch order.
///
/// Fields compare case-insensitively first, with the raw string as the
/// tie-breaker. A missing field compares as the empty string, so it sorts
/// first ascending and last descending. The sort is stable.
pub fn sorted(products: &[Product], sort: SortOption) -> Vec<Product> {
    let mut ordered = products.to_vec();
    ordered.sort_by(|a, b| {
        let ordering = compare_text(sort_field(a, sort), sort_field(b, sort));
        if sort.is_descending() {
            ordering.reverse()
        } else {
            ordering
        }
    });
    ordered
}

fn sort_field(product: &Product, sort: SortOption) -> &str {
    let field = match sort {
        SortOption::NameAsc | SortOption::NameDesc => product.name(),
        SortOption::GradeAsc | SortOption::GradeDesc => product.nutrition_grade(),
    };
    field.unwrap_or("")
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
