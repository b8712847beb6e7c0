//! CSV export
//!
//! Renders a report as one CSV document with two sections: a header row plus
//! one row per organic result, a blank separator row, then a header row plus
//! one row per local business.

use crate::error::ScrapeError;
use crate::results::SerpReport;

/// Header row for the organic section
pub const ORGANIC_HEADER: [&str; 6] = [
    "Position",
    "URL",
    "Title",
    "Description",
    "Image",
    "Reviews",
];

/// Header row for the local pack section
pub const LOCAL_HEADER: [&str; 6] = ["Name", "URL", "Address", "Phone", "Reviews", "Hours"];

/// Serialize a report to CSV bytes.
///
/// The two sections are rendered independently and joined with one blank
/// separator row, producing exactly `organic + local + 3` rows.
pub fn to_csv(report: &SerpReport) -> Result<Vec<u8>, ScrapeError> {
    let mut out = organic_section(report)?;
    out.push(b'\n');
    out.extend(local_section(report)?);
    Ok(out)
}

fn organic_section(report: &SerpReport) -> Result<Vec<u8>, ScrapeError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(ORGANIC_HEADER)?;
    for result in &report.organic {
        writer.write_record([
            result.position.to_string(),
            result.url.clone(),
            result.title.clone(),
            result.description.clone(),
            result.image.clone(),
            result.reviews.clone(),
        ])?;
    }
    finish(writer)
}

fn local_section(report: &SerpReport) -> Result<Vec<u8>, ScrapeError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(LOCAL_HEADER)?;
    for business in &report.local {
        writer.write_record([
            business.name.as_str(),
            business.url.as_str(),
            business.address.as_str(),
            business.phone.as_str(),
            business.reviews.as_str(),
            business.hours.as_str(),
        ])?;
    }
    finish(writer)
}

fn finish(mut writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, ScrapeError> {
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| ScrapeError::Io(std::io::Error::new(e.error().kind(), e.error().to_string())))
}

/// Download filename derived from the keyword.
///
/// Path-hostile characters are replaced so the value is safe inside a
/// Content-Disposition header; a keyword that sanitizes away entirely falls
/// back to a fixed name.
pub fn export_filename(keyword: &str) -> String {
    let stem: String = keyword
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let stem = stem.trim_matches(|c: char| c == '_' || c.is_whitespace());
    if stem.is_empty() {
        "search-results.csv".to_string()
    } else {
        format!("{}.csv", stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{LocalBusiness, OrganicResult};

    fn organic(position: u32, title: &str, description: &str) -> OrganicResult {
        OrganicResult {
            position,
            url: format!("https://example.com/{position}"),
            title: title.to_string(),
            description: description.to_string(),
            image: "No image".to_string(),
            reviews: "No reviews".to_string(),
        }
    }

    fn business(name: &str) -> LocalBusiness {
        LocalBusiness {
            name: name.to_string(),
            url: "https://maps.example.com".to_string(),
            address: "1 Main St".to_string(),
            phone: "(555) 010-0000".to_string(),
            reviews: "4.2 (88)".to_string(),
            hours: "Open - Closes 5PM".to_string(),
        }
    }

    #[test]
    fn row_count_is_n_plus_m_plus_three() {
        let report = SerpReport::new(
            vec![organic(1, "a", "x"), organic(2, "b", "y")],
            vec![business("c")],
        );

        let csv = String::from_utf8(to_csv(&report).unwrap()).unwrap();
        assert_eq!(csv.lines().count(), 2 + 1 + 3);
    }

    #[test]
    fn sections_are_separated_by_a_blank_row() {
        let report = SerpReport::new(vec![organic(1, "a", "x")], vec![business("b")]);

        let csv = String::from_utf8(to_csv(&report).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Position,URL,Title,Description,Image,Reviews");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Name,URL,Address,Phone,Reviews,Hours");
    }

    #[test]
    fn empty_report_still_renders_both_headers() {
        let csv = String::from_utf8(to_csv(&SerpReport::default()).unwrap()).unwrap();
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let report = SerpReport::new(vec![organic(1, "a, b", "x")], vec![]);

        let csv = String::from_utf8(to_csv(&report).unwrap()).unwrap();
        assert!(csv.contains("\"a, b\""));
    }

    #[test]
    fn filename_follows_the_keyword() {
        assert_eq!(export_filename("coffee"), "coffee.csv");
        assert_eq!(export_filename("coffee shops"), "coffee shops.csv");
    }

    #[test]
    fn filename_strips_hostile_characters() {
        assert_eq!(
            export_filename("best/coffee: 2024"),
            "best_coffee_ 2024.csv"
        );
        assert_eq!(export_filename("../../etc"), "etc.csv");
    }

    #[test]
    fn blank_keyword_falls_back_to_fixed_name() {
        assert_eq!(export_filename("   "), "search-results.csv");
        assert_eq!(export_filename("///"), "search-results.csv");
    }
}
