//! Record type definitions
//!
//! Every field is always present: either text taken from the page or the
//! documented sentinel string. Records are built once during an extraction
//! pass and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Sentinel for a listing with no resolvable link
pub const NO_URL: &str = "No URL";
/// Sentinel for an organic listing without a title
pub const NO_TITLE: &str = "No title";
/// Sentinel for an organic listing without a snippet
pub const NO_DESCRIPTION: &str = "No description";
/// Sentinel for an organic listing without a thumbnail
pub const NO_IMAGE: &str = "No image";
/// Sentinel for a listing without a review badge
pub const NO_REVIEWS: &str = "No reviews";
/// Sentinel for a local listing without a business name
pub const NO_NAME: &str = "No name";
/// Sentinel for a local listing without an address line
pub const NO_ADDRESS: &str = "No address";
/// Sentinel for a local listing without a phone number
pub const NO_PHONE: &str = "No phone number";
/// Sentinel for a local listing without opening hours
pub const NO_HOURS: &str = "No hours";

/// Inline notice shown when the form is submitted without a keyword
pub const MISSING_KEYWORD_NOTICE: &str = "Please fill out the keyword field.";

/// A standard (non-ad, non-local) search listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganicResult {
    /// 1-based position in document order, not an externally meaningful rank
    pub position: u32,
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub reviews: String,
}

impl OrganicResult {
    /// Placeholder row signaling a missing keyword; carries the notice in the
    /// description field and sentinels everywhere else.
    pub fn missing_keyword() -> Self {
        Self {
            position: 1,
            url: NO_URL.to_string(),
            title: NO_TITLE.to_string(),
            description: MISSING_KEYWORD_NOTICE.to_string(),
            image: NO_IMAGE.to_string(),
            reviews: NO_REVIEWS.to_string(),
        }
    }
}

/// One business listing from the local pack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalBusiness {
    pub name: String,
    pub url: String,
    pub address: String,
    pub phone: String,
    pub reviews: String,
    pub hours: String,
}

/// The two independent sequences extracted from one results page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerpReport {
    pub organic: Vec<OrganicResult>,
    pub local: Vec<LocalBusiness>,
}

impl SerpReport {
    pub fn new(organic: Vec<OrganicResult>, local: Vec<LocalBusiness>) -> Self {
        Self { organic, local }
    }

    /// Report for a submission with no keyword: one placeholder row, no
    /// local listings.
    pub fn missing_keyword() -> Self {
        Self {
            organic: vec![OrganicResult::missing_keyword()],
            local: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.organic.is_empty() && self.local.is_empty()
    }

    pub fn listing_count(&self) -> usize {
        self.organic.len() + self.local.len()
    }
}
