//! Application state shared across handlers

use super::Templates;
use crate::config::Settings;
use crate::error::ScrapeError;
use crate::scrape::SerpFetcher;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// SERP fetcher collaborator
    pub fetcher: Arc<dyn SerpFetcher>,
    /// Template renderer
    pub templates: Arc<Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, fetcher: Arc<dyn SerpFetcher>) -> Result<Self, ScrapeError> {
        Ok(Self {
            settings: Arc::new(settings),
            fetcher,
            templates: Arc::new(Templates::new()?),
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
