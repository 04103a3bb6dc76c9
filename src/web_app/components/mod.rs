// web_app/components/mod.rs - UI components module
//
// Leptos components shared by the two pages.
//
// Structure:
// - common.rs: Small stateless pieces (Loading, StatusMessage, InfoRow, ...)
// - filters.rs: The filter sidebar and its controlled inputs
// - product.rs: Product card, grid and detail view
// - visibility.rs: IntersectionObserver guard driving infinite scroll

pub mod common;
pub mod filters;
pub mod product;
pub mod visibility;

pub use common::*;
pub use filters::*;
pub use product::*;
pub use visibility::watch_last_card;
