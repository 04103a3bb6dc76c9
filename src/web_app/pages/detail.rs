// web_app/pages/detail.rs - Single product page
//
// Resolves `:id` from the route, fetches the product once per identifier
// and renders one of the `DetailState` variants.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::web_app::api::{FoodApi, OpenFoodFactsClient};
use crate::web_app::components::{Loading, ProductDetailView, StatusMessage};
use crate::web_app::config::ApiConfig;
use crate::web_app::model::DetailState;
use crate::web_app::routes::LISTING_PATH;

/// Product detail page component
#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let api = StoredValue::new_local(OpenFoodFactsClient::new(config));

    let params = use_params_map();
    // Only a changed identifier triggers a new fetch
    let id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    let product = LocalResource::new(move || {
        let id = id.get();
        let client = api.get_value();
        async move {
            let outcome = client.product(&id).await;
            let state = DetailState::from_outcome(&id, outcome);
            (id, state)
        }
    });

    // A result for another identifier means the new lookup is still running
    let state = Signal::derive(move || id.with(|current| DetailState::for_id(current, product.get())));

    view! {
        <div class="min-h-screen bg-gray-50">
            {move || match state.get() {
                DetailState::Loading => view! { <Loading /> }.into_any(),
                DetailState::Loaded(detail) => view! { <ProductDetailView product=*detail /> }.into_any(),
                other => {
                    let message = other.message().unwrap_or_default();
                    view! {
                        <StatusMessage message=message tone="text-2xl font-bold text-red-500" />
                        <div class="text-center">
                            <a href=LISTING_PATH class="text-blue-600 hover:underline">"← Back to products"</a>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
