//! Result type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of reference sources.
///
/// Aggregation and citation formatting are exhaustive over this enum, so
/// adding a source is a compile-time event, not a silent fallback.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SourceName {
    PubMed,
    ArXiv,
    Wikipedia,
}

/// Fixed fan-out and concatenation order for aggregation.
pub const SOURCE_ORDER: [SourceName; 3] =
    [SourceName::PubMed, SourceName::ArXiv, SourceName::Wikipedia];

impl SourceName {
    /// Label used in citation links and user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PubMed => "PubMed",
            Self::ArXiv => "ArXiv",
            Self::Wikipedia => "Wikipedia",
        }
    }

    /// Lowercase identifier used in settings and command wiring.
    pub fn key(&self) -> &'static str {
        match self {
            Self::PubMed => "pubmed",
            Self::ArXiv => "arxiv",
            Self::Wikipedia => "wikipedia",
        }
    }
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::error::Error for SourceName {}

/// A single normalized search result.
///
/// Every field is optional on the wire; adapters resolve the synonym fields
/// (`link` for `url`, `abstract`/`snippet`/`summary` for the descriptive
/// text) before a `Record` is produced, so consumers only deal with this
/// canonical shape. Records are immutable once produced by an adapter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Title of the article or page
    pub title: Option<String>,
    /// Author names; empty means unknown
    #[serde(default)]
    pub authors: Vec<String>,
    /// Publication year as given by the service
    pub year: Option<String>,
    /// Full publication date; a year can be derived from its prefix
    pub date: Option<String>,
    /// Canonical URL of the result
    pub url: Option<String>,
    /// Abstract or extract text
    pub summary: Option<String>,
}

/// A record tagged with the source it came from.
///
/// Built by the aggregator from a clone of the adapter's record; the
/// adapter's original is never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnnotatedRecord {
    #[serde(flatten)]
    pub record: Record,
    pub source: SourceName,
}

impl AnnotatedRecord {
    pub fn new(record: Record, source: SourceName) -> Self {
        Self { record, source }
    }
}

/// Errors produced by a search.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SearchError {
    /// A blank query never reaches the network.
    #[error("search query is empty")]
    EmptyQuery,
    /// Network failure, non-2xx status, or malformed JSON from one source.
    /// Any one of these fails the whole aggregation.
    #[error("{source}: {message}")]
    Transport {
        source: SourceName,
        message: String,
    },
}

impl SearchError {
    pub fn transport(source: SourceName, message: impl Into<String>) -> Self {
        Self::Transport {
            source,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_labels() {
        assert_eq!(SourceName::PubMed.label(), "PubMed");
        assert_eq!(SourceName::ArXiv.key(), "arxiv");
        assert_eq!(SourceName::Wikipedia.to_string(), "Wikipedia");
    }

    #[test]
    fn test_transport_error_message() {
        let err = SearchError::transport(SourceName::PubMed, "HTTP error: 503");
        assert_eq!(err.to_string(), "PubMed: HTTP error: 503");
    }

    #[test]
    fn test_annotate_leaves_record_intact() {
        let record = Record {
            title: Some("CRISPR".to_string()),
            ..Default::default()
        };
        let annotated = AnnotatedRecord::new(record.clone(), SourceName::ArXiv);
        assert_eq!(annotated.record, record);
        assert_eq!(annotated.source, SourceName::ArXiv);
    }
}
