//! SERP fetching
//!
//! One outbound GET per invocation, no retries and no caching. The fetcher
//! sits behind a trait so the request core can be exercised with fakes.

use crate::config::SerpSettings;
use crate::error::ScrapeError;
use crate::network::HttpClient;
use async_trait::async_trait;
use tracing::debug;

/// Fetches the raw results page for a query
#[async_trait]
pub trait SerpFetcher: Send + Sync {
    /// Fetch the results page for `keyword`, optionally scoped to a location.
    ///
    /// Returns the body text as received, whatever the status code;
    /// transport faults surface as [`ScrapeError::Fetch`].
    async fn fetch(&self, keyword: &str, location: Option<&str>) -> Result<String, ScrapeError>;
}

/// Fetcher for the Google web results page
pub struct GoogleFetcher {
    client: HttpClient,
    base_url: String,
    result_count: u32,
}

impl GoogleFetcher {
    pub fn new(client: HttpClient, settings: &SerpSettings) -> Self {
        Self {
            client,
            base_url: settings.base_url.clone(),
            result_count: settings.result_count,
        }
    }

    fn build_query(keyword: &str, location: Option<&str>) -> String {
        match location {
            Some(location) => format!("{} {}", keyword, location),
            None => keyword.to_string(),
        }
    }
}

#[async_trait]
impl SerpFetcher for GoogleFetcher {
    async fn fetch(&self, keyword: &str, location: Option<&str>) -> Result<String, ScrapeError> {
        let query = Self::build_query(keyword, location);
        debug!("fetching results page for '{}'", query);

        let params = [("q", query), ("num", self.result_count.to_string())];
        self.client.get_text(&self.base_url, &params).await
    }
}
