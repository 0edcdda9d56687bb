use serde_json::Value;

use crate::error::Result;

use super::types::ParameterSet;

/// One fetched page of search results, as produced by a [`PageFetcher`].
#[derive(Debug, Clone)]
pub struct PageResult {
    /// Raw result entries, in the order the source returned them.
    pub entries: Vec<Value>,
    /// Total number of results the source claims match the query.
    pub result_count: u64,
    /// Page size the source claims to use. A page may actually carry fewer
    /// or more entries than this.
    pub page_size: u64,
}

/// Source of result pages for a listings search.
///
/// [`ListingsApi`](crate::api::ListingsApi) is the shipped HTTP
/// implementation; the trait is the seam for alternative transports and for
/// in-memory fakes in tests.
pub trait PageFetcher {
    /// Fetches one page of results for the given parameters.
    ///
    /// `page` is 1-based and independent of whatever page size the source
    /// uses internally.
    fn fetch_page(&self, params: &ParameterSet, page: u32) -> Result<PageResult>;
}
