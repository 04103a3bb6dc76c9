// common/mod.rs - Shared test utilities
//
// `FakeApi` answers `FoodApi` calls from canned results and records every
// call, so the listing flow can be driven end to end without a network.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use nutrient_scope::web_app::api::{execute, ApiError, FoodApi};
use nutrient_scope::web_app::model::{Category, ListingEvent, ListingState, Product, ProductDetail};

/// One recorded `FoodApi` call
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Search(String, u32),
    Category(String, u32),
    Categories,
    Product(String),
}

/// In-memory `FoodApi`
///
/// Pages not configured come back empty; `failing` makes every call fail.
#[derive(Default)]
pub struct FakeApi {
    pub search_pages: HashMap<(String, u32), Vec<Product>>,
    pub category_pages: HashMap<(String, u32), Vec<Product>>,
    pub categories: Vec<Category>,
    pub products: HashMap<String, ProductDetail>,
    pub failing: bool,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_search_page(mut self, term: &str, page: u32, products: Vec<Product>) -> Self {
        self.search_pages.insert((term.to_string(), page), products);
        self
    }

    pub fn with_category_page(mut self, slug: &str, page: u32, products: Vec<Product>) -> Self {
        self.category_pages.insert((slug.to_string(), page), products);
        self
    }

    pub fn with_product(mut self, code: &str, product: ProductDetail) -> Self {
        self.products.insert(code.to_string(), product);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if self.failing {
            Err(ApiError::Status(503))
        } else {
            Ok(())
        }
    }
}

impl FoodApi for FakeApi {
    async fn search(&self, term: &str, page: u32) -> Result<Vec<Product>, ApiError> {
        self.record(Call::Search(term.to_string(), page))?;
        Ok(self
            .search_pages
            .get(&(term.to_string(), page))
            .cloned()
            .unwrap_or_default())
    }

    async fn category(&self, slug: &str, page: u32) -> Result<Vec<Product>, ApiError> {
        self.record(Call::Category(slug.to_string(), page))?;
        Ok(self
            .category_pages
            .get(&(slug.to_string(), page))
            .cloned()
            .unwrap_or_default())
    }

    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.record(Call::Categories)?;
        Ok(self.categories.clone())
    }

    async fn product(&self, code: &str) -> Result<Option<ProductDetail>, ApiError> {
        self.record(Call::Product(code.to_string()))?;
        Ok(self.products.get(code).cloned())
    }
}

/// Applies `event` and runs every fetch it triggers to completion, the way
/// the listing page does.
pub async fn drive(state: &mut ListingState, api: &FakeApi, event: ListingEvent) {
    if let Some(request) = state.apply(event) {
        let completion = execute(api, request).await;
        assert!(state.apply(completion).is_none(), "completions never fetch");
    }
}

/// Display names, `None` rendered as `-`.
pub fn names(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.product_name.clone().unwrap_or_else(|| "-".to_string()))
        .collect()
}
