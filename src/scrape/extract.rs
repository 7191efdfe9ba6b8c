// src/scrape/extract.rs
//! The target site embeds its result data as JSON inside inline scripts
//! rather than exposing an API, so both page types are mined the same way:
//! find the script, regex-capture the assignment's right-hand side, decode.

use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::warn;

// Non-greedy, DOT-ALL capture up to the first `};`. A literal `};` inside a
// string value of the embedded JSON truncates the capture early; the decode
// then fails and the page counts as unusable. Known upstream fragility.
const DETAIL_PATTERN: &str = r"(?s)window\._initialData\s*=\s*(\{.*?\});";
const LIST_PATTERN: &str =
    r#"(?s)window\.mosaic\.providerData\["mosaic-provider-jobcards"\]\s*=\s*(\{.*?\});"#;

const DETAIL_MARKER: &str = "window._initialData";

/// Pulls the job-detail payload out of a viewjob page. Scans every script
/// tag for the marker; the first one whose capture decodes as JSON wins.
pub fn extract_detail_payload(document: &Html) -> Option<Value> {
    let scripts = Selector::parse("script").expect("static selector");
    let pattern = Regex::new(DETAIL_PATTERN).expect("static pattern");

    for script in document.select(&scripts) {
        let text: String = script.text().collect();
        if !text.contains(DETAIL_MARKER) {
            continue;
        }

        if let Some(captures) = pattern.captures(&text) {
            match serde_json::from_str::<Value>(&captures[1]) {
                Ok(payload) => return Some(payload),
                Err(e) => warn!("Error decoding embedded job detail JSON: {}", e),
            }
        }
    }

    None
}

/// Pulls the per-job records out of a search-results page: the single
/// `mosaic-data` script, the jobcards provider assignment, then the
/// `metaData.mosaicProviderJobCardsModel.results` sequence.
pub fn extract_list_payload(document: &Html) -> Option<Vec<Value>> {
    let mosaic = Selector::parse("script#mosaic-data").expect("static selector");
    let pattern = Regex::new(LIST_PATTERN).expect("static pattern");

    let script = document.select(&mosaic).next()?;
    let text: String = script.text().collect();
    let captures = pattern.captures(&text)?;

    let payload: Value = match serde_json::from_str(&captures[1]) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Error decoding embedded job list JSON: {}", e);
            return None;
        }
    };

    let results = payload
        .pointer("/metaData/mosaicProviderJobCardsModel/results")?
        .as_array()?;

    Some(results.clone())
}
