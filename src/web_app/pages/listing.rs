// web_app/pages/listing.rs - Product listing page
//
// Owns the whole listing state in one signal and changes it only through
// `ListingState::apply`. Every fetch decision returned by a transition is run
// on the local executor; its completion goes back through the same path, so
// stale or post-unmount responses are dropped by the state itself.
//
// Layout:
// - Filter sidebar (slides in on narrow viewports)
// - Header with the sidebar toggle
// - Product grid with infinite scroll

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::{execute, FoodApi, OpenFoodFactsClient};
use crate::web_app::components::{FilterPanel, Loading, ProductGrid, StatusMessage};
use crate::web_app::config::ApiConfig;
use crate::web_app::model::{Category, ListingEvent, ListingState, SortOption};

pub const NO_BARCODE_RESULT_MESSAGE: &str = "No product found for this barcode.";
pub const EMPTY_RESULT_MESSAGE: &str = "No products found.";

/// Feeds `event` into the listing state and runs the fetch it asks for.
///
/// Does nothing once the page is gone: `try_update` returns `None` on a
/// disposed signal, which is how late completions after unmount are dropped.
fn dispatch(
    listing: RwSignal<ListingState>,
    api: StoredValue<OpenFoodFactsClient, LocalStorage>,
    event: ListingEvent,
) {
    let Some(request) = listing.try_update(|state| state.apply(event)).flatten() else {
        return;
    };
    let Some(client) = api.try_get_value() else {
        return;
    };

    spawn_local(async move {
        let completion = execute(&client, request).await;
        dispatch(listing, api, completion);
    });
}

/// Listing page component
#[component]
pub fn ListingPage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let default_category = config.default_category.clone();
    let api = StoredValue::new_local(OpenFoodFactsClient::new(config));

    // ========================================================================
    // State
    // ========================================================================

    let listing = RwSignal::new(ListingState::new(default_category));
    let sidebar_open = RwSignal::new(false);

    let send = move |event: ListingEvent| dispatch(listing, api, event);

    // First page of the default listing once mounted in the browser
    Effect::new(move |_| send(ListingEvent::Mounted));

    let categories = LocalResource::new(move || {
        let client = api.get_value();
        async move {
            match client.categories().await {
                Ok(categories) => {
                    tracing::info!(count = categories.len(), "categories fetched");
                    categories
                }
                Err(err) => {
                    tracing::warn!(%err, "error fetching categories");
                    Vec::new()
                }
            }
        }
    });

    // ========================================================================
    // Derived views of the state
    // ========================================================================

    let visible = Memo::new(move |_| listing.with(ListingState::visible_products));
    let armed = Signal::derive(move || listing.with(ListingState::can_advance));
    let loading = Signal::derive(move || listing.with(|s| s.loading));
    let no_barcode_result = Signal::derive(move || listing.with(|s| s.no_barcode_result));
    let empty_result = Signal::derive(move || listing.with(ListingState::is_empty_result));

    let sort = Signal::derive(move || listing.with(|s| s.query.sort));
    let category = Signal::derive(move || listing.with(|s| s.query.category.clone()));
    let search = Signal::derive(move || listing.with(|s| s.query.search.clone()));
    let barcode = Signal::derive(move || listing.with(|s| s.query.barcode.clone()));
    let category_list: Signal<Vec<Category>> =
        Signal::derive(move || categories.get().unwrap_or_default());

    // ========================================================================
    // Callbacks
    // ========================================================================

    let on_toggle = Callback::new(move |()| sidebar_open.update(|open| *open = !*open));
    let on_sort = Callback::new(move |option: SortOption| send(ListingEvent::SortChanged(option)));
    let on_category = Callback::new(move |slug: String| send(ListingEvent::CategorySelected(slug)));
    let on_search = Callback::new(move |term: String| send(ListingEvent::SearchCommitted(term)));
    let on_barcode_input = Callback::new(move |text: String| send(ListingEvent::BarcodeEdited(text)));
    let on_barcode_submit = Callback::new(move |()| send(ListingEvent::BarcodeSubmitted));
    let on_last_visible = Callback::new(move |()| send(ListingEvent::LastCardVisible));

    view! {
        <div class="flex flex-col md:flex-row min-h-screen bg-gray-50">
            <FilterPanel
                open=sidebar_open.into()
                on_toggle=on_toggle
                sort=sort
                on_sort=on_sort
                categories=category_list
                category=category
                on_category=on_category
                search=search
                on_search=on_search
                barcode=barcode
                on_barcode_input=on_barcode_input
                on_barcode_submit=on_barcode_submit
            />

            <main class="flex-1 p-4">
                <header class="flex items-center gap-4 mb-6">
                    <button
                        type="button"
                        class="md:hidden text-2xl"
                        title="Show filters"
                        on:click=move |_| on_toggle.run(())
                    >
                        "☰"
                    </button>
                    <h1 class="text-2xl font-bold text-green-600">"Food Products"</h1>
                </header>

                <Show when=move || no_barcode_result.get()>
                    <StatusMessage message=NO_BARCODE_RESULT_MESSAGE tone="text-2xl font-bold text-red-500" />
                </Show>

                <ProductGrid products=visible.into() armed=armed on_last_visible=on_last_visible />

                <Show when=move || loading.get()>
                    <Loading />
                </Show>

                <Show when=move || empty_result.get()>
                    <StatusMessage message=EMPTY_RESULT_MESSAGE />
                </Show>
            </main>
        </div>
    }
}
