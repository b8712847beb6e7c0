//! SERP scraping module
//!
//! One fetch plus one parse per request: the fetcher retrieves the raw
//! results page, the extractor projects it into flat records. `run_search`
//! is the stateless request core shared by the view and export paths.

mod extractor;
mod fetcher;
mod selectors;

pub use extractor::extract;
pub use fetcher::{GoogleFetcher, SerpFetcher};

use crate::error::ScrapeError;
use crate::results::SerpReport;

/// The three form inputs driving a search
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    pub keyword: String,
    pub location: Option<String>,
    pub ignore_location: bool,
}

impl SearchInput {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            location: None,
            ignore_location: false,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Location to scope the query with, or None when the ignore flag is set
    /// or the field is blank.
    pub fn effective_location(&self) -> Option<&str> {
        if self.ignore_location {
            return None;
        }
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|loc| !loc.is_empty())
    }
}

/// Run one search: validate the keyword, fetch the results page, extract.
///
/// A blank keyword short-circuits to the placeholder report without touching
/// the network. Transport faults from the fetcher propagate as
/// [`ScrapeError::Fetch`].
pub async fn run_search(
    fetcher: &dyn SerpFetcher,
    input: &SearchInput,
) -> Result<SerpReport, ScrapeError> {
    let keyword = input.keyword.trim();
    if keyword.is_empty() {
        return Ok(SerpReport::missing_keyword());
    }

    let html = fetcher.fetch(keyword, input.effective_location()).await?;
    Ok(extract(&html))
}
