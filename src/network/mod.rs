//! HTTP networking module
//!
//! Provides the outbound HTTP client used to fetch search results pages.

mod client;
mod user_agent;

pub use client::HttpClient;
pub use user_agent::DESKTOP_USER_AGENT;
