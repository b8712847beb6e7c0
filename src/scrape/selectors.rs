//! Structural patterns for the results-page markup
//!
//! Every CSS selector the extractor relies on lives in this one table. The
//! class names come from a captured snapshot of the results page; when the
//! upstream markup shifts, the selectors stop matching and every field
//! degrades to its sentinel until this table is updated.

use once_cell::sync::Lazy;
use scraper::Selector;

/// Named selector table, one entry per structural pattern
pub struct SelectorTable {
    /// One organic result block
    pub organic_block: Selector,
    /// Title inside an organic block
    pub organic_title: Selector,
    /// Snippet inside an organic block
    pub organic_snippet: Selector,
    /// Outbound link inside an organic block
    pub organic_link: Selector,
    /// Thumbnail inside an organic block
    pub organic_image: Selector,
    /// Review badge inside an organic block
    pub organic_reviews: Selector,
    /// One local pack business block
    pub local_block: Selector,
    /// Business name inside a local block
    pub local_name: Selector,
    /// First linked anchor inside a local block
    pub local_link: Selector,
    /// Details wrapper, first sub-line (address)
    pub local_address: Selector,
    /// Details wrapper itself (phone line lives in its text)
    pub local_details: Selector,
    /// Review badge inside the details wrapper
    pub local_reviews: Selector,
    /// Details wrapper, third sub-line (opening hours)
    pub local_hours: Selector,
}

pub static SELECTORS: Lazy<SelectorTable> = Lazy::new(|| SelectorTable {
    organic_block: pattern("div.tF2Cxc"),
    organic_title: pattern(".DKV0Md"),
    organic_snippet: pattern(".IsZvec"),
    organic_link: pattern(".yuRUbf a"),
    organic_image: pattern("img"),
    organic_reviews: pattern("div.fG8Fp.uo4vr"),
    local_block: pattern("div.VkpGBb"),
    local_name: pattern("div.dbg0pd"),
    local_link: pattern("a[href]"),
    local_address: pattern(".rllt__details div:nth-of-type(1)"),
    local_details: pattern(".rllt__details"),
    local_reviews: pattern(".rllt__details span.BTtC6e"),
    local_hours: pattern(".rllt__details div:nth-of-type(3)"),
});

fn pattern(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector `{css}`: {e:?}"))
}
