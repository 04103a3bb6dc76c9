// web_app/api/mod.rs - Food API access
//
// - endpoints.rs: URL construction for the four request shapes
// - client.rs: reqwest-backed `FoodApi` implementation
// - error.rs: `ApiError`
//
// `execute` runs one `FetchRequest` decided by the listing state machine and
// turns the outcome into the completion event fed back into it.

pub mod client;
pub mod endpoints;
pub mod error;

pub use client::OpenFoodFactsClient;
pub use endpoints::Endpoint;
pub use error::ApiError;

use crate::web_app::model::{
    Category, FetchRequest, ListingEvent, Product, ProductDetail, QuerySource,
};

/// Read-only access to the food product catalog
///
/// The futures are not required to be `Send`: in the browser they are driven
/// by the single-threaded WASM executor.
#[allow(async_fn_in_trait)]
pub trait FoodApi {
    /// One page of full-text search results.
    async fn search(&self, term: &str, page: u32) -> Result<Vec<Product>, ApiError>;

    /// One page of a category listing.
    async fn category(&self, slug: &str, page: u32) -> Result<Vec<Product>, ApiError>;

    /// All known categories.
    async fn categories(&self) -> Result<Vec<Category>, ApiError>;

    /// A single product by barcode; `None` when the API does not know it.
    async fn product(&self, code: &str) -> Result<Option<ProductDetail>, ApiError>;
}

/// Runs `request` against `api` and reports the matching completion event.
pub async fn execute<A: FoodApi>(api: &A, request: FetchRequest) -> ListingEvent {
    match request {
        FetchRequest::Page { generation, query } => {
            let page = query.page;
            let result = match &query.source {
                QuerySource::Search(term) => api.search(term, page).await,
                QuerySource::Category(slug) | QuerySource::Default(slug) => {
                    api.category(slug, page).await
                }
            };
            match result {
                Ok(products) => {
                    tracing::info!(count = products.len(), page, generation, "products fetched");
                    ListingEvent::PageLoaded {
                        generation,
                        page,
                        products,
                    }
                }
                Err(err) => {
                    tracing::error!(%err, page, generation, "error fetching products");
                    ListingEvent::PageFailed { generation }
                }
            }
        }
        FetchRequest::Barcode { generation, code } => match api.product(&code).await {
            Ok(product) => {
                if product.is_none() {
                    tracing::info!(%code, "no product for barcode");
                }
                ListingEvent::BarcodeLoaded {
                    generation,
                    product: product.map(Product::from),
                }
            }
            Err(err) => {
                tracing::error!(%err, %code, "error fetching product by barcode");
                ListingEvent::BarcodeFailed { generation }
            }
        },
    }
}
