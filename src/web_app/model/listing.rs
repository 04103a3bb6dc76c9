// web_app/model/listing.rs - Listing query state and its transition function
//
// The listing page never mutates its state directly. Every user action,
// visibility notification and fetch completion is an event fed into
// `ListingState::apply`, which returns the fetch (if any) the page must issue.
//
// Each issued fetch carries a generation number. Completions from an older
// generation are dropped, so a slow page-2 response can never land on top of
// a newer query.

use super::{sorted, Product, SortOption};
use crate::web_app::config::DEFAULT_CATEGORY;

/// The bundle of inputs that decides what the listing shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    /// Committed free-text search term (empty = none)
    pub search: String,
    /// Barcode draft, looked up on explicit submit
    pub barcode: String,
    /// Selected category slug (empty = none)
    pub category: String,
    pub sort: SortOption,
    /// 1-based page of the paginated query
    pub page: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            barcode: String::new(),
            category: String::new(),
            sort: SortOption::default(),
            page: 1,
        }
    }
}

/// Which remote listing a page query targets
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuerySource {
    Search(String),
    Category(String),
    /// No search term and no selected category
    Default(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageQuery {
    pub source: QuerySource,
    pub page: u32,
}

impl PageQuery {
    /// Search term wins over category, category wins over the default.
    pub fn for_state(query: &QueryState, default_category: &str) -> Self {
        let source = if !query.search.is_empty() {
            QuerySource::Search(query.search.clone())
        } else if !query.category.is_empty() {
            QuerySource::Category(query.category.clone())
        } else {
            QuerySource::Default(default_category.to_string())
        };
        Self {
            source,
            page: query.page,
        }
    }
}

/// A fetch the page has to run, tagged with the generation that issued it
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchRequest {
    Page { generation: u64, query: PageQuery },
    Barcode { generation: u64, code: String },
}

impl FetchRequest {
    pub fn generation(&self) -> u64 {
        match self {
            FetchRequest::Page { generation, .. } | FetchRequest::Barcode { generation, .. } => {
                *generation
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListingEvent {
    Mounted,
    SearchCommitted(String),
    CategorySelected(String),
    SortChanged(SortOption),
    BarcodeEdited(String),
    BarcodeSubmitted,
    LastCardVisible,
    PageLoaded {
        generation: u64,
        page: u32,
        products: Vec<Product>,
    },
    PageFailed {
        generation: u64,
    },
    BarcodeLoaded {
        generation: u64,
        product: Option<Product>,
    },
    BarcodeFailed {
        generation: u64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListingState {
    pub query: QueryState,
    /// Products in fetch order; sorting happens on read
    pub products: Vec<Product>,
    pub loading: bool,
    pub has_more: bool,
    pub no_barcode_result: bool,
    generation: u64,
    default_category: String,
    /// Query of the page fetch in flight, if any
    pending: Option<PageQuery>,
    /// Source that produced `products`; `None` after a barcode lookup
    loaded_source: Option<QuerySource>,
    /// Last page of `loaded_source` that arrived
    loaded_page: u32,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY)
    }
}

impl ListingState {
    pub fn new(default_category: impl Into<String>) -> Self {
        Self {
            query: QueryState::default(),
            products: Vec::new(),
            loading: false,
            has_more: true,
            no_barcode_result: false,
            generation: 0,
            default_category: default_category.into(),
            pending: None,
            loaded_source: None,
            loaded_page: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the last card may arm the visibility observer.
    ///
    /// Only the query that produced the shown products can be extended.
    pub fn can_advance(&self) -> bool {
        !self.loading
            && self.has_more
            && self.loaded_source.as_ref() == Some(&self.current_source())
    }

    fn current_source(&self) -> QuerySource {
        PageQuery::for_state(&self.query, &self.default_category).source
    }

    /// Products in display order for the current sort directive.
    pub fn visible_products(&self) -> Vec<Product> {
        sorted(&self.products, self.query.sort)
    }

    /// A finished query that produced nothing; false before the first request.
    pub fn is_empty_result(&self) -> bool {
        self.generation > 0 && !self.loading && !self.no_barcode_result && self.products.is_empty()
    }

    pub fn apply(&mut self, event: ListingEvent) -> Option<FetchRequest> {
        tracing::debug!(?event, generation = self.generation, "listing transition");
        match event {
            ListingEvent::Mounted => {
                self.query.page = 1;
                Some(self.start_page_query())
            }
            ListingEvent::SearchCommitted(term) => {
                self.query.search = term.trim().to_string();
                self.query.page = 1;
                Some(self.start_page_query())
            }
            ListingEvent::CategorySelected(slug) => {
                self.query.category = slug.trim().to_string();
                self.query.page = 1;
                Some(self.start_page_query())
            }
            ListingEvent::SortChanged(sort) => {
                self.query.sort = sort;
                None
            }
            ListingEvent::BarcodeEdited(text) => {
                self.query.barcode = text;
                None
            }
            ListingEvent::BarcodeSubmitted => {
                let code = self.query.barcode.trim().to_string();
                if code.is_empty() {
                    return None;
                }
                self.loading = true;
                self.no_barcode_result = false;
                self.pending = None;
                let generation = self.next_generation();
                tracing::info!(%code, generation, "looking up barcode");
                Some(FetchRequest::Barcode { generation, code })
            }
            ListingEvent::LastCardVisible => {
                if !self.can_advance() {
                    return None;
                }
                self.query.page = self.loaded_page + 1;
                Some(self.start_page_query())
            }
            ListingEvent::PageLoaded {
                generation,
                page,
                products,
            } => {
                if self.is_stale(generation) {
                    return None;
                }
                let source = self.pending.take().map(|query| query.source);
                self.has_more = !products.is_empty();
                if page > 1 && source.is_some() && source == self.loaded_source {
                    self.products.extend(products);
                } else {
                    if page > 1 {
                        tracing::warn!(page, "page does not continue the shown results, replacing them");
                    }
                    self.products = products;
                }
                self.loaded_source = source;
                self.loaded_page = page;
                self.query.page = page;
                self.loading = false;
                None
            }
            ListingEvent::PageFailed { generation } => {
                if !self.is_stale(generation) {
                    // stop advancing; the shown products stay as they were
                    self.pending = None;
                    let continues_shown = self.loaded_source.as_ref() == Some(&self.current_source());
                    self.query.page = if continues_shown { self.loaded_page.max(1) } else { 1 };
                    self.has_more = false;
                    self.loading = false;
                }
                None
            }
            ListingEvent::BarcodeLoaded {
                generation,
                product,
            } => {
                if self.is_stale(generation) {
                    return None;
                }
                match product {
                    Some(product) => {
                        self.products = vec![product];
                        self.no_barcode_result = false;
                    }
                    None => {
                        self.products.clear();
                        self.no_barcode_result = true;
                    }
                }
                self.loaded_source = None;
                self.loaded_page = 0;
                self.has_more = false;
                self.loading = false;
                None
            }
            ListingEvent::BarcodeFailed { generation } => {
                if !self.is_stale(generation) {
                    self.loading = false;
                }
                None
            }
        }
    }

    fn start_page_query(&mut self) -> FetchRequest {
        self.loading = true;
        self.no_barcode_result = false;
        let generation = self.next_generation();
        let query = PageQuery::for_state(&self.query, &self.default_category);
        tracing::info!(source = ?query.source, page = query.page, generation, "fetching products");
        self.pending = Some(query.clone());
        FetchRequest::Page { generation, query }
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn is_stale(&self, generation: u64) -> bool {
        let stale = generation != self.generation;
        if stale {
            tracing::warn!(
                generation,
                current = self.generation,
                "discarding stale completion"
            );
        }
        stale
    }
}
