// web_app/app.rs - Root application component
//
// Sets up meta tags, the shared API configuration and the two-route table.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::config::ApiConfig;
use crate::web_app::pages::{ListingPage, ProductDetailPage};
use crate::web_app::routes::LISTING_PATH;

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - The food API configuration, shared through context
/// - Router with the listing and detail routes
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::default());

    view! {
        <Title text="NutrientScope" />
        <Meta name="description" content="Browse food products, nutrition grades and ingredients from Open Food Facts" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/nutrient_scope.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=ListingPage />
                <Route path=path!("/product/:id") view=ProductDetailPage />
            </Routes>
        </Router>
    }
}

/// Fallback for any other path
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href=LISTING_PATH
                    class="px-6 py-3 bg-green-600 text-white rounded-lg hover:bg-green-700 transition-colors"
                >
                    "Back to products"
                </a>
            </div>
        </div>
    }
}
