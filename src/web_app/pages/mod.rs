// web_app/pages/mod.rs - Page components module
//
// One component per route:
// - ListingPage: filterable, infinitely scrolling product grid ("/")
// - ProductDetailPage: a single product ("/product/:id")

pub mod detail;
pub mod listing;

pub use detail::ProductDetailPage;
pub use listing::ListingPage;
