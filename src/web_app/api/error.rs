// web_app/api/error.rs - Errors raised while talking to the food API

use thiserror::Error;

/// Network or parse failure; "not found" outcomes are not errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
