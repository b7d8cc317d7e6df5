//! Wire-format parsing shared by the reference services
//!
//! All three services answer with the same loose JSON envelope:
//! `{ "results": [ { title?, authors?, year?, date?, url?, link?,
//! abstract?|snippet?|summary? }, ... ] }`. Every field is optional and some
//! carry synonyms; normalization resolves them here, at the adapter
//! boundary, so the rest of the crate only sees the canonical [`Record`].

use crate::results::{Record, SearchError, SourceName};
use crate::sources::SourceResponse;
use serde::Deserialize;
use tracing::warn;

/// One result as the services send it, synonyms and all.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireRecord {
    title: Option<String>,
    authors: Option<Vec<String>>,
    year: Option<String>,
    date: Option<String>,
    url: Option<String>,
    link: Option<String>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    snippet: Option<String>,
    summary: Option<String>,
}

impl WireRecord {
    /// Resolve synonym fields: `link` stands in for a missing `url`, and the
    /// descriptive text is the first non-empty of abstract, snippet, summary.
    fn normalize(self) -> Record {
        Record {
            title: non_empty(self.title),
            authors: self.authors.unwrap_or_default(),
            year: non_empty(self.year),
            date: non_empty(self.date),
            url: non_empty(self.url).or_else(|| non_empty(self.link)),
            summary: non_empty(self.abstract_text)
                .or_else(|| non_empty(self.snippet))
                .or_else(|| non_empty(self.summary)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a service response into normalized records.
///
/// A missing or non-array `results` key is zero hits. Structurally invalid
/// JSON or a non-2xx status is a transport failure attributed to `source`.
pub(crate) fn parse_results(
    source: SourceName,
    response: &SourceResponse,
) -> Result<Vec<Record>, SearchError> {
    if !response.is_success() {
        return Err(SearchError::transport(
            source,
            format!("HTTP error: {}", response.status),
        ));
    }

    let body: serde_json::Value = serde_json::from_str(&response.text)
        .map_err(|e| SearchError::transport(source, format!("invalid JSON: {}", e)))?;

    let Some(items) = body.get("results").and_then(|r| r.as_array()) else {
        return Ok(Vec::new());
    };

    let records = items
        .iter()
        .filter_map(|item| match WireRecord::deserialize(item) {
            Ok(raw) => Some(raw.normalize()),
            Err(e) => {
                warn!("{}: skipping malformed result entry: {}", source, e);
                None
            }
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(text: &str) -> SourceResponse {
        SourceResponse {
            status: 200,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_missing_results_key_is_zero_hits() {
        let records = parse_results(SourceName::PubMed, &ok("{}")).unwrap();
        assert!(records.is_empty());

        // A completely different shape is also tolerated as zero hits.
        let records = parse_results(SourceName::PubMed, &ok(r#"{"hits": 3}"#)).unwrap();
        assert!(records.is_empty());

        let records = parse_results(SourceName::PubMed, &ok("[1, 2, 3]")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_invalid_json_is_transport_error() {
        let err = parse_results(SourceName::ArXiv, &ok("{not json")).unwrap_err();
        assert!(matches!(
            err,
            SearchError::Transport {
                source: SourceName::ArXiv,
                ..
            }
        ));
    }

    #[test]
    fn test_non_success_status_is_transport_error() {
        let response = SourceResponse {
            status: 500,
            text: "{}".to_string(),
        };
        let err = parse_results(SourceName::Wikipedia, &response).unwrap_err();
        assert_eq!(err.to_string(), "Wikipedia: HTTP error: 500");
    }

    #[test]
    fn test_link_stands_in_for_url() {
        let body = r#"{"results": [{"title": "T", "link": "https://x.test/1"}]}"#;
        let records = parse_results(SourceName::ArXiv, &ok(body)).unwrap();
        assert_eq!(records[0].url.as_deref(), Some("https://x.test/1"));
    }

    #[test]
    fn test_url_wins_over_link() {
        let body = r#"{"results": [{"url": "https://x.test/a", "link": "https://x.test/b"}]}"#;
        let records = parse_results(SourceName::PubMed, &ok(body)).unwrap();
        assert_eq!(records[0].url.as_deref(), Some("https://x.test/a"));
    }

    #[test]
    fn test_descriptive_text_first_non_empty_wins() {
        let body = r#"{"results": [
            {"abstract": "A"},
            {"snippet": "S"},
            {"summary": "Z"},
            {"abstract": "", "snippet": "S2", "summary": "Z2"}
        ]}"#;
        let records = parse_results(SourceName::PubMed, &ok(body)).unwrap();
        assert_eq!(records[0].summary.as_deref(), Some("A"));
        assert_eq!(records[1].summary.as_deref(), Some("S"));
        assert_eq!(records[2].summary.as_deref(), Some("Z"));
        assert_eq!(records[3].summary.as_deref(), Some("S2"));
    }

    #[test]
    fn test_empty_strings_normalize_to_absent() {
        let body = r#"{"results": [{"title": " ", "year": "", "url": ""}]}"#;
        let records = parse_results(SourceName::Wikipedia, &ok(body)).unwrap();
        assert_eq!(records[0], Record::default());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let body = r#"{"results": [{"title": "good"}, "not an object", 42]}"#;
        let records = parse_results(SourceName::ArXiv, &ok(body)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("good"));
    }
}
