// web_app/components/filters.rs - Filter sidebar
//
// Controlled inputs only: every value comes from the listing page and every
// change goes back through a callback. The panel's one piece of local state
// is the search draft, which is committed only when the search button is
// pressed.
//
// - FilterPanel: the sidebar, slides in on narrow viewports
// - SortSelect / CategorySelect: directive and category selectors
// - SearchField / BarcodeField: text inputs with explicit commit

use chrono::Datelike;
use leptos::prelude::*;
use leptos::web_sys::KeyboardEvent;

use crate::web_app::model::{Category, SortOption};

/// Classes that slide the sidebar in or out below the `md` breakpoint.
pub fn sidebar_class(open: bool) -> String {
    let position = if open { "translate-x-0" } else { "-translate-x-full" };
    format!(
        "sidebar fixed inset-0 bg-gray-200 p-4 flex flex-col transition-transform duration-300 {} \
         md:translate-x-0 md:relative md:w-64 md:min-h-screen z-50",
        position
    )
}

/// Sort directive selector
#[component]
pub fn SortSelect(
    /// Current directive
    sort: Signal<SortOption>,
    on_sort: Callback<SortOption>,
) -> impl IntoView {
    view! {
        <div class="mb-4 w-full">
            <label class="block mb-2 font-semibold">"Sort by:"</label>
            <select
                class="w-full p-2 border rounded"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    on_sort.run(SortOption::from_value(&value).unwrap_or_default());
                }
            >
                {SortOption::ALL.into_iter().map(|opt| {
                    view! {
                        <option value=opt.as_value() selected=move || sort.get() == opt>
                            {opt.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Category selector; the empty value means "All Categories"
#[component]
pub fn CategorySelect(
    /// Known categories
    categories: Signal<Vec<Category>>,
    /// Selected slug
    category: Signal<String>,
    on_category: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label class="block mb-2 font-semibold">"Filter by Category:"</label>
            <select
                class="w-full max-w-xs p-2 border rounded"
                on:change=move |ev| on_category.run(event_target_value(&ev))
            >
                <option value="" selected=move || category.get().is_empty()>"All Categories"</option>
                <For
                    each=move || categories.get()
                    key=|c| c.slug().to_string()
                    children=move |c| {
                        let slug = c.slug().to_string();
                        let slug_for_check = slug.clone();
                        view! {
                            <option value=slug selected=move || category.get() == slug_for_check>
                                {c.name}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Product name search; commits only on the search button, never on Enter
#[component]
pub fn SearchField(
    /// Committed search term
    search: Signal<String>,
    on_search: Callback<String>,
) -> impl IntoView {
    let draft = RwSignal::new(search.get_untracked());

    // Follow the committed term when it changes from outside
    Effect::new(move || {
        draft.set(search.get());
    });

    view! {
        <div class="mb-4 md:w-52">
            <label class="block mb-2 font-semibold">"Search for Products :"</label>
            <div class="relative">
                <input
                    type="text"
                    placeholder="Enter product name"
                    class="w-full p-2 border rounded outline-none"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute right-0 top-0 bottom-0 p-2 bg-blue-500 text-white rounded-r"
                    title="Search"
                    on:click=move |_| on_search.run(draft.get_untracked())
                >
                    "🔍"
                </button>
            </div>
        </div>
    }
}

/// Barcode lookup; commits on the button or the Enter key
#[component]
pub fn BarcodeField(
    /// Current barcode text
    barcode: Signal<String>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_submit.run(());
        }
    };

    view! {
        <div class="mb-4">
            <label class="block mb-2 font-semibold">"Search by Barcode:"</label>
            <div class="relative">
                <input
                    type="text"
                    placeholder="Enter barcode"
                    class="w-full p-2 border rounded outline-none"
                    prop:value=move || barcode.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:keydown=handle_keydown
                />
                <button
                    type="button"
                    class="absolute right-0 top-0 bottom-0 p-2 bg-blue-500 text-white rounded-r"
                    title="Look up barcode"
                    on:click=move |_| on_submit.run(())
                >
                    "🔍"
                </button>
            </div>
        </div>
    }
}

/// Complete filter sidebar
#[component]
pub fn FilterPanel(
    /// Whether the sidebar is shown on narrow viewports
    open: Signal<bool>,
    on_toggle: Callback<()>,
    sort: Signal<SortOption>,
    on_sort: Callback<SortOption>,
    categories: Signal<Vec<Category>>,
    category: Signal<String>,
    on_category: Callback<String>,
    search: Signal<String>,
    on_search: Callback<String>,
    barcode: Signal<String>,
    on_barcode_input: Callback<String>,
    on_barcode_submit: Callback<()>,
) -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <aside class=move || sidebar_class(open.get())>
            <div class="flex justify-between items-center mb-4">
                <a href="/" class="text-2xl text-green-600">
                    <span class="text-gray-500">"Nutrient"</span>
                    <span class="font-semibold text-3xl">"S"</span>
                    "cope"
                </a>
                <button
                    type="button"
                    class="md:hidden mb-4 text-red-500 text-2xl"
                    title="Close filters"
                    on:click=move |_| on_toggle.run(())
                >
                    "✕"
                </button>
            </div>

            <h2 class="text-xl font-bold mb-2">"Filters"</h2>

            <SortSelect sort=sort on_sort=on_sort />
            <CategorySelect categories=categories category=category on_category=on_category />
            <SearchField search=search on_search=on_search />
            <BarcodeField barcode=barcode on_input=on_barcode_input on_submit=on_barcode_submit />

            <div class="mt-auto text-center text-sm text-gray-600">
                <p>{format!("© {} NutrientScope. Product data from Open Food Facts.", year)}</p>
            </div>
        </aside>
    }
}
