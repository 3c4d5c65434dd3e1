//! Name search results parser
//!
//! The search endpoint answers with a JSON array of player records.
//! Each record's `careerLink` carries platform and region, and its raw
//! `level` folds the prestige count into the hundreds.

use serde::Deserialize;

use crate::error::{OwStatsError, Result};
use crate::types::SearchResult;
use crate::url::split_career_link;

/// A search record as served upstream
#[derive(Debug, Deserialize)]
struct RawSearchRecord {
    name: String,

    #[serde(rename = "careerLink")]
    career_link: String,

    #[serde(default)]
    level: u32,

    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

/// Normalizes a `Name-1234` battle-tag into `Name#1234`
///
/// Only the first `-` is replaced; later ones are left as they are.
pub fn normalize_battle_tag(name: &str) -> String {
    name.replacen('-', "#", 1)
}

/// Parses the search endpoint body into search results
///
/// # Errors
/// Returns `ParseError` if the body is not a JSON array of records
pub fn parse_search_results(json: &str) -> Result<Vec<SearchResult>> {
    let records: Vec<RawSearchRecord> = serde_json::from_str(json)
        .map_err(|e| OwStatsError::ParseError(format!("Invalid search response: {}", e)))?;

    Ok(records.into_iter().map(into_search_result).collect())
}

fn into_search_result(record: RawSearchRecord) -> SearchResult {
    let RawSearchRecord {
        name,
        career_link,
        level,
        mut extra,
    } = record;

    let (platform, region) = split_career_link(&career_link).unwrap_or_default();
    // replaced by the values derived from the career link
    extra.remove("platform");
    extra.remove("region");

    SearchResult {
        name,
        career_link,
        platform,
        region,
        tier: level / 100,
        level: level % 100,
        extra,
    }
}
