//! SERP Scout: a keyword search-results scraper with a web front end
//!
//! Fetches a search-engine results page for a keyword (optionally scoped to a
//! location), extracts organic listings and the local business pack, and
//! serves both as HTML tables with a CSV download.

pub mod config;
pub mod error;
pub mod export;
pub mod network;
pub mod results;
pub mod scrape;
pub mod web;

pub use config::Settings;
pub use error::ScrapeError;
pub use results::{LocalBusiness, OrganicResult, SerpReport};
pub use scrape::{extract, run_search, GoogleFetcher, SearchInput, SerpFetcher};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
