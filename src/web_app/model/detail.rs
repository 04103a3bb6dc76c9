// web_app/model/detail.rs - Render states of the product detail page

use super::ProductDetail;
use crate::web_app::api::ApiError;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching product details. Please try again later.";
pub const NOT_FOUND_MESSAGE: &str = "No product found.";

/// Mutually exclusive states of the detail view
#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Loading,
    Failed,
    NotFound,
    Loaded(Box<ProductDetail>),
}

impl DetailState {
    /// Folds a finished lookup into a render state, logging failures.
    pub fn from_outcome(id: &str, outcome: Result<Option<ProductDetail>, ApiError>) -> Self {
        match outcome {
            Ok(Some(product)) => DetailState::Loaded(Box::new(product)),
            Ok(None) => {
                tracing::info!(%id, "product not found");
                DetailState::NotFound
            }
            Err(err) => {
                tracing::error!(%id, %err, "error fetching product details");
                DetailState::Failed
            }
        }
    }

    /// State to show for the route identifier `current_id`.
    ///
    /// `loaded` is the last finished lookup and the identifier it was made
    /// for. While the lookup for a newly navigated-to identifier is still
    /// running, the previous product must not stay on screen.
    pub fn for_id(current_id: &str, loaded: Option<(String, DetailState)>) -> Self {
        match loaded {
            Some((id, state)) if id == current_id => state,
            _ => DetailState::Loading,
        }
    }

    /// Fixed text for every state except `Loaded`.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            DetailState::Loading => Some(LOADING_MESSAGE),
            DetailState::Failed => Some(FETCH_ERROR_MESSAGE),
            DetailState::NotFound => Some(NOT_FOUND_MESSAGE),
            DetailState::Loaded(_) => None,
        }
    }

    pub fn product(&self) -> Option<&ProductDetail> {
        match self {
            DetailState::Loaded(product) => Some(product),
            _ => None,
        }
    }
}
