// web_app/config.rs - Food API configuration
//
// The browser bundle cannot read environment variables at runtime, so the
// API base URL is baked in at compile time from `NUTRIENT_SCOPE_API_URL`.
// Native code (the server binary, tests) may also override it at runtime.

/// Public Open Food Facts instance
pub const DEFAULT_API_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Category listed when neither a search term nor a category is selected
pub const DEFAULT_CATEGORY: &str = "snacks";

/// Name of the environment variable overriding the API base URL
pub const API_URL_ENV: &str = "NUTRIENT_SCOPE_API_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub default_category: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let base_url = option_env!("NUTRIENT_SCOPE_API_URL").unwrap_or(DEFAULT_API_BASE_URL);
        Self {
            base_url: normalize_base_url(base_url),
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl ApiConfig {
    /// Compile-time defaults, overridden by the runtime environment when set.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => config,
        }
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = normalize_base_url(base_url.as_ref());
        self
    }

    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
