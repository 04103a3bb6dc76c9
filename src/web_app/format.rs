// web_app/format.rs - Display formatting of API fields
//
// Applied at render time only; the fetched data is never rewritten.
// Absent or blank values render as the `N/A` placeholder.

use crate::web_app::model::strip_language_prefix;

pub const PLACEHOLDER: &str = "N/A";

/// Trimmed value, or `N/A` when absent or blank.
pub fn or_placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Leaf name of one `namespace:name` ingredient entry.
pub fn ingredient_name(entry: &str) -> &str {
    entry.split_once(':').map_or(entry, |(_, name)| name)
}

/// `["en:sugar", "en:cocoa"]` -> `sugar, cocoa`
pub fn ingredients(hierarchy: Option<&[String]>) -> String {
    match hierarchy {
        Some(entries) if !entries.is_empty() => entries
            .iter()
            .map(|entry| ingredient_name(entry))
            .collect::<Vec<_>>()
            .join(", "),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Individual leaf names, for rendering as chips.
pub fn ingredient_list(hierarchy: Option<&[String]>) -> Vec<String> {
    hierarchy
        .unwrap_or_default()
        .iter()
        .map(|entry| ingredient_name(entry).trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

/// `Snacks, sweet snacks` -> `SNACKS, SWEET SNACKS`
pub fn categories(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v
            .split(',')
            .map(|c| c.trim().to_uppercase())
            .collect::<Vec<_>>()
            .join(", "),
        _ => PLACEHOLDER.to_string(),
    }
}

/// `en:milk, en:soy` -> `MILK  SOY`
pub fn allergens(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => tag_list(v.split(',')),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Additive tags formatted like allergens, else the raw field.
pub fn additives(tags: Option<&[String]>, raw: Option<&str>) -> String {
    match tags {
        Some(tags) if !tags.is_empty() => tag_list(tags.iter().map(String::as_str)),
        _ => or_placeholder(raw),
    }
}

/// Upper-cased nutrition grade.
pub fn grade(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_uppercase(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn tag_list<'a>(tags: impl Iterator<Item = &'a str>) -> String {
    tags.map(|tag| strip_language_prefix(tag.trim()).to_uppercase().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join("  ")
}
