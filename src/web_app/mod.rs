// web_app/mod.rs - Root module for the Leptos catalog viewer
//
// Architecture:
// - model/: API data types, the listing state machine, sorting, detail states
// - api/: Open Food Facts client (runs in the browser)
// - config.rs / format.rs / routes.rs: API settings, display formatting, paths
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Listing and detail pages (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod api;
pub mod config;
pub mod format;
pub mod model;
pub mod routes;

pub use config::ApiConfig;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
