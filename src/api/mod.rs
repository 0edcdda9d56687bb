//! HTTP-backed page fetcher for the hosted listings API.

use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::search::{PageFetcher, PageResult, ParameterSet};

/// Hosted listings search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.zoopla.co.uk/api/v1/property_listings.json";

const USER_AGENT: &str = concat!("propsearch/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Page size requested per API call (also the API's maximum).
const DEFAULT_PAGE_SIZE: u64 = 100;

/// Blocking HTTP client for the listings API, usable wherever a
/// [`PageFetcher`] is expected.
pub struct ListingsApi {
    http: Client,
    endpoint: Url,
    api_key: String,
    page_size: u64,
}

impl ListingsApi {
    /// Creates a client for the hosted endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    /// Creates a client against a custom endpoint, e.g. a sandbox.
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("invalid listings endpoint `{endpoint}`"))?;
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            endpoint,
            api_key: api_key.into(),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Overrides the page size requested per API call.
    pub fn page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Full query pairs for one page request: the search parameters plus
    /// credentials and paging.
    fn query(&self, params: &ParameterSet, page: u32) -> Vec<(String, String)> {
        let mut query = params.query_pairs();
        query.push(("api_key".to_owned(), self.api_key.clone()));
        query.push(("page_number".to_owned(), page.to_string()));
        query.push(("page_size".to_owned(), self.page_size.to_string()));
        query
    }
}

/// Shape of one reply from the listings endpoint.
#[derive(Debug, Deserialize)]
struct ApiReply {
    #[serde(default)]
    result_count: u64,
    #[serde(default)]
    page_size: Option<u64>,
    #[serde(default)]
    listing: Vec<Value>,
    #[serde(default)]
    error_string: Option<String>,
}

impl PageFetcher for ListingsApi {
    fn fetch_page(&self, params: &ParameterSet, page: u32) -> Result<PageResult> {
        debug!(page, endpoint = %self.endpoint, "requesting listings page");

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&self.query(params, page))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(Error::Api {
                code: status.as_u16(),
                message: message.trim().to_owned(),
            });
        }

        let reply: ApiReply = response.json()?;
        if let Some(message) = reply.error_string {
            // The API reports some failures inside a 200 body.
            return Err(Error::Api {
                code: status.as_u16(),
                message,
            });
        }

        Ok(PageResult {
            entries: reply.listing,
            result_count: reply.result_count,
            page_size: reply.page_size.unwrap_or(self.page_size),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::search::SaleSearch;

    #[test]
    fn query_includes_request_and_paging_parameters() {
        let api = ListingsApi::with_endpoint("secret", "http://localhost:9/listings")
            .unwrap()
            .page_size(10);
        let mut sales = SaleSearch::new();
        sales.within(2);

        let query = api.query(sales.request(), 3);
        assert!(query.contains(&("listing_status".to_owned(), "sale".to_owned())));
        assert!(query.contains(&("radius".to_owned(), "2".to_owned())));
        assert!(query.contains(&("api_key".to_owned(), "secret".to_owned())));
        assert!(query.contains(&("page_number".to_owned(), "3".to_owned())));
        assert!(query.contains(&("page_size".to_owned(), "10".to_owned())));
    }

    #[test]
    fn a_bad_endpoint_is_rejected() {
        assert!(ListingsApi::with_endpoint("key", "not a url").is_err());
    }

    #[test]
    fn replies_deserialize_with_defaults() {
        let reply: ApiReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.result_count, 0);
        assert!(reply.listing.is_empty());
        assert!(reply.page_size.is_none());
        assert!(reply.error_string.is_none());
    }

    #[test]
    fn replies_deserialize_listings_and_counts() {
        let reply: ApiReply = serde_json::from_value(json!({
            "result_count": 42,
            "page_size": 10,
            "listing": [{ "listing_id": "1" }, { "listing_id": "2" }],
            "country": "England"
        }))
        .unwrap();
        assert_eq!(reply.result_count, 42);
        assert_eq!(reply.page_size, Some(10));
        assert_eq!(reply.listing.len(), 2);
    }

    #[test]
    fn error_bodies_deserialize() {
        let reply: ApiReply = serde_json::from_value(json!({
            "error_code": "7",
            "error_string": "Disabled API key"
        }))
        .unwrap();
        assert_eq!(reply.error_string.as_deref(), Some("Disabled API key"));
    }
}
