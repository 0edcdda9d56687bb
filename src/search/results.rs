use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::Listing;

use super::traits::{PageFetcher, PageResult};
use super::types::ParameterSet;

/// Lazy iterator over every listing matching a search, across page
/// boundaries.
///
/// Pages are fetched strictly on demand, one request at a time, each with
/// the same parameter snapshot and an incremented page number. Iteration
/// ends when the number of yielded listings reaches the total the source
/// declared (never because a page happened to match its nominal size), when
/// the source returns an empty page, or on the first fetch error, which is
/// yielded once as `Err`.
pub struct SearchResults<'f> {
    fetcher: &'f dyn PageFetcher,
    params: ParameterSet,
    page: u32,
    current: std::vec::IntoIter<Value>,
    total: u64,
    yielded: u64,
    started: bool,
    done: bool,
}

impl<'f> SearchResults<'f> {
    pub(crate) fn new(fetcher: &'f dyn PageFetcher, params: ParameterSet) -> Self {
        Self {
            fetcher,
            params,
            page: 1,
            current: Vec::new().into_iter(),
            total: 0,
            yielded: 0,
            started: false,
            done: false,
        }
    }

    /// Records the metadata of a freshly fetched page. The declared total is
    /// refreshed on every page; the latest declaration wins.
    fn note_page(&mut self, page: &PageResult) {
        if self.started && page.result_count != self.total {
            warn!(
                declared = page.result_count,
                previous = self.total,
                "source revised its declared total"
            );
        }
        self.total = page.result_count;

        let actual = page.entries.len() as u64;
        if actual != page.page_size {
            warn!(
                page = self.page,
                nominal = page.page_size,
                actual,
                "page entry count disagrees with nominal page size"
            );
        }
    }
}

impl Iterator for SearchResults<'_> {
    type Item = Result<Listing>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            if let Some(entry) = self.current.next() {
                self.yielded += 1;
                return Some(Ok(Listing::from_entry(entry)));
            }
            if self.started && self.yielded >= self.total {
                self.done = true;
                return None;
            }
            match self.fetcher.fetch_page(&self.params, self.page) {
                Ok(page) => {
                    self.note_page(&page);
                    self.started = true;
                    debug!(
                        page = self.page,
                        entries = page.entries.len(),
                        total = self.total,
                        "fetched results page"
                    );
                    if page.entries.is_empty() {
                        // The source ran dry; stop rather than request the
                        // same nothing forever.
                        if self.yielded < self.total {
                            warn!(
                                yielded = self.yielded,
                                declared = self.total,
                                "source exhausted before its declared total"
                            );
                        }
                        self.done = true;
                        return None;
                    }
                    self.page += 1;
                    self.current = page.entries.into_iter();
                }
                Err(error) => {
                    self.done = true;
                    return Some(Err(error));
                }
            }
        }
    }
}
