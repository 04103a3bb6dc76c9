// web_app/api/client.rs - reqwest implementation of FoodApi
//
// Compiled to WASM, reqwest issues requests through `window.fetch`, so the
// browser talks to Open Food Facts directly; no application server sits in
// between.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::endpoints::Endpoint;
use super::{ApiError, FoodApi};
use crate::web_app::config::ApiConfig;
use crate::web_app::model::{
    Category, CategoryCatalog, Product, ProductDetail, ProductLookup, ProductPage,
};

#[derive(Clone, Debug)]
pub struct OpenFoodFactsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl Default for OpenFoodFactsClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl OpenFoodFactsClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError> {
        let url = endpoint.url(&self.config.base_url)?;
        tracing::debug!(%url, "GET");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl FoodApi for OpenFoodFactsClient {
    async fn search(&self, term: &str, page: u32) -> Result<Vec<Product>, ApiError> {
        let page: ProductPage = self.get(Endpoint::Search { term, page }).await?;
        Ok(page.into_products())
    }

    async fn category(&self, slug: &str, page: u32) -> Result<Vec<Product>, ApiError> {
        let page: ProductPage = self.get(Endpoint::Category { slug, page }).await?;
        Ok(page.into_products())
    }

    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let catalog: CategoryCatalog = self.get(Endpoint::Categories).await?;
        Ok(catalog.into_categories())
    }

    async fn product(&self, code: &str) -> Result<Option<ProductDetail>, ApiError> {
        match self.get::<ProductLookup>(Endpoint::Product { code }).await {
            Ok(lookup) => Ok(lookup.into_product()),
            // newer API revisions answer unknown barcodes with 404
            Err(ApiError::Status(status)) if status == StatusCode::NOT_FOUND.as_u16() => Ok(None),
            Err(err) => Err(err),
        }
    }
}
