//! HTTP client for fetching search results pages

use super::user_agent::{accept_html, accept_language};
use super::DESKTOP_USER_AGENT;
use crate::config::OutgoingSettings;
use crate::error::ScrapeError;
use reqwest::Client;
use std::time::Duration;

/// Thin wrapper around reqwest with a browser-like header set
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self, ScrapeError> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .gzip(true)
            .brotli(true);

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent: DESKTOP_USER_AGENT.to_string(),
        })
    }

    /// GET a URL with query parameters and return the body text.
    ///
    /// The response body is returned regardless of status code; only
    /// transport-level faults produce an error.
    pub async fn get_text(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", accept_html())
            .header("Accept-Language", accept_language("en"))
            .header("DNT", "1")
            .header("Upgrade-Insecure-Requests", "1")
            .query(params)
            .send()
            .await?;

        Ok(response.text().await?)
    }

    /// Current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
