// web_app/api/endpoints.rs - URL construction for the Open Food Facts API
//
// Four request shapes are used:
// - full-text search:  /cgi/search.pl?search_terms=..&page=..&json=true
// - category listing:  /category/{slug}.json?page=..
// - category catalog:  /categories.json
// - product lookup:    /api/v0/product/{code}.json

use reqwest::Url;

use super::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Search { term: &'a str, page: u32 },
    Category { slug: &'a str, page: u32 },
    Categories,
    Product { code: &'a str },
}

impl Endpoint<'_> {
    /// Absolute URL of this endpoint under `base_url`.
    ///
    /// Path segments and query values are percent-encoded, so search terms
    /// and barcodes typed by the user cannot escape their position.
    pub fn url(&self, base_url: &str) -> Result<Url, ApiError> {
        let mut url = Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        let segments: Vec<String> = match self {
            Endpoint::Search { .. } => vec!["cgi".into(), "search.pl".into()],
            Endpoint::Category { slug, .. } => vec!["category".into(), format!("{slug}.json")],
            Endpoint::Categories => vec!["categories.json".into()],
            Endpoint::Product { code } => {
                vec!["api".into(), "v0".into(), "product".into(), format!("{code}.json")]
            }
        };

        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("{base_url} cannot be a base")))?
            .pop_if_empty()
            .extend(&segments);

        match self {
            Endpoint::Search { term, page } => {
                url.query_pairs_mut()
                    .append_pair("search_terms", term)
                    .append_pair("page", &page.to_string())
                    .append_pair("json", "true");
            }
            Endpoint::Category { page, .. } => {
                url.query_pairs_mut().append_pair("page", &page.to_string());
            }
            Endpoint::Categories | Endpoint::Product { .. } => {}
        }

        Ok(url)
    }
}
