// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ProductCard: Grid card linking to the detail page
// - ProductGrid: Responsive grid that watches its last card for infinite scroll
// - ProductDetailView: Full product detail with nutrition, labels and tags

use leptos::html;
use leptos::prelude::*;

use super::common::{Chip, InfoRow, Section};
use super::visibility::watch_last_card;
use crate::web_app::format;
use crate::web_app::model::{Nutriments, Product, ProductDetail, Quantity};
use crate::web_app::routes::{product_path, LISTING_PATH};

/// Product card for the listing grid
///
/// The whole card is a link to the detail route; a product without any
/// identifier links back to the listing.
#[component]
pub fn ProductCard(
    /// The product summary to display
    product: Product,
) -> impl IntoView {
    let href = product
        .identifier()
        .map(product_path)
        .unwrap_or_else(|| LISTING_PATH.to_string());
    let name = format::or_placeholder(product.name());
    let categories = format::categories(product.categories.as_deref());
    let grade = format::grade(product.nutrition_grade());
    let ingredients = format::ingredients(product.ingredients_hierarchy.as_deref());

    view! {
        <a
            href=href
            class="block bg-white rounded-lg shadow-md hover:shadow-xl transition-shadow duration-300 \
                   overflow-hidden h-full"
        >
            <ProductImage url=product.image_url.clone() alt=name.clone() class="w-full h-48 object-contain" />

            <div class="p-4">
                <h2 class="text-lg font-bold mb-2 line-clamp-2">{name}</h2>
                <InfoRow label="Category" value=categories class="text-sm text-gray-600 line-clamp-2" />
                <InfoRow label="Nutrition Grade" value=grade class="text-sm text-gray-600" />
                <InfoRow label="Ingredients" value=ingredients class="text-sm text-gray-600 line-clamp-3" />
            </div>
        </a>
    }
}

/// Product image, or a placeholder box when the product has none
#[component]
fn ProductImage(url: Option<String>, alt: String, class: &'static str) -> impl IntoView {
    match url.filter(|u| !u.trim().is_empty()) {
        Some(src) => view! { <img src=src alt=alt class=class loading="lazy" /> }.into_any(),
        None => view! {
            <div class=format!("{} bg-gray-100 flex items-center justify-center text-gray-300", class)>
                <span class="text-4xl">"📦"</span>
            </div>
        }
        .into_any(),
    }
}

/// Grid layout for the listing
///
/// The last card is wrapped in a node the infinite-scroll observer watches.
/// `armed` gates the observer; `on_last_visible` fires when it intersects.
#[component]
pub fn ProductGrid(
    /// Products in display order
    products: Signal<Vec<Product>>,
    /// Whether another page may be requested
    armed: Signal<bool>,
    on_last_visible: Callback<()>,
) -> impl IntoView {
    let last_card = NodeRef::<html::Div>::new();
    watch_last_card(last_card, armed, on_last_visible);

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            {move || {
                let products = products.get();
                let last = products.len().saturating_sub(1);
                products
                    .into_iter()
                    .enumerate()
                    .map(|(index, product)| {
                        if index == last {
                            view! {
                                <div node_ref=last_card>
                                    <ProductCard product=product />
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div>
                                    <ProductCard product=product />
                                </div>
                            }
                            .into_any()
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Nutrient row value, with its unit when known
pub fn nutrient_value(value: Option<&Quantity>, unit: &str) -> String {
    match value {
        Some(quantity) => {
            let text = quantity.to_string();
            if text.is_empty() {
                format::PLACEHOLDER.to_string()
            } else if unit.is_empty() {
                text
            } else {
                format!("{} {}", text, unit)
            }
        }
        None => format::PLACEHOLDER.to_string(),
    }
}

/// Full product detail view
#[component]
pub fn ProductDetailView(
    /// The fetched product
    product: ProductDetail,
) -> impl IntoView {
    let name = format::or_placeholder(product.product.name());
    let grade = format::grade(product.nutrition_grade());
    let nutriments = product.nutriments.clone().unwrap_or_default();
    let Nutriments {
        energy,
        fat,
        carbohydrates,
        proteins,
        ..
    } = nutriments;
    let ingredients = format::ingredient_list(product.product.ingredients_hierarchy.as_deref());
    let labels = format::or_placeholder(product.labels.as_deref());
    let brand = format::or_placeholder(product.brands.as_deref());
    let categories = format::categories(product.product.categories.as_deref());
    let allergens = format::allergens(product.allergens.as_deref());
    let additives = format::additives(product.additives_tags.as_deref(), product.additives.as_deref());
    let packaging = format::or_placeholder(product.packaging.as_deref());

    view! {
        <div class="max-w-5xl mx-auto p-4">
            <a href=LISTING_PATH class="inline-block mb-4 text-blue-600 hover:underline">
                "← Back to products"
            </a>

            <h1 class="text-3xl font-bold mb-6 text-center">{name.clone()}</h1>

            <div class="flex flex-col md:flex-row gap-6 mb-6">
                <ProductImage
                    url=product.product.image_url.clone()
                    alt=name
                    class="w-full md:w-1/3 h-72 object-contain rounded-lg shadow-md bg-white"
                />

                <div class="flex-1">
                    <Section title="Nutritional Values">
                        <InfoRow label="Energy" value=nutrient_value(energy.as_ref(), "kJ") />
                        <InfoRow label="Fat" value=nutrient_value(fat.as_ref(), "g") />
                        <InfoRow label="Carbohydrates" value=nutrient_value(carbohydrates.as_ref(), "g") />
                        <InfoRow label="Proteins" value=nutrient_value(proteins.as_ref(), "g") />
                        <InfoRow label="Nutrition Grade" value=grade />
                    </Section>
                </div>
            </div>

            <Section title="Labels">
                <p class="text-lg">{labels}</p>
            </Section>

            <Section title="Ingredients">
                {if ingredients.is_empty() {
                    view! { <p class="text-lg">{format::PLACEHOLDER}</p> }.into_any()
                } else {
                    view! {
                        <div class="flex flex-wrap">
                            {ingredients
                                .into_iter()
                                .map(|ingredient| view! { <Chip>{ingredient}</Chip> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </Section>

            <Section title="Additional Details">
                <InfoRow label="Brand" value=brand />
                <InfoRow label="Categories" value=categories />
                <InfoRow label="Allergens" value=allergens />
                <InfoRow label="Additives" value=additives />
                <InfoRow label="Packaging" value=packaging />
            </Section>
        </div>
    }
}
