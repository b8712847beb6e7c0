//! Error taxonomy
//!
//! Transport faults are the only fetch-side errors; non-2xx responses are
//! returned as body text, and absent fields in the markup degrade to
//! sentinel strings rather than errors.

use thiserror::Error;

/// Errors surfaced by the scrape and presentation layers
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport-level failure while fetching the results page (DNS,
    /// connection refused, timeout). Never raised for non-2xx statuses.
    #[error("search page fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Template rendering failure
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// CSV serialization failure
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure while finalizing an export buffer
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    /// True when the error came from the outbound fetch
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}
