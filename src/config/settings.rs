//! Settings structure for the citation search core

use crate::results::SourceName;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Smallest allowed per-source result count.
pub const MIN_RESULTS: u32 = 1;
/// Largest allowed per-source result count.
pub const MAX_RESULTS: u32 = 20;

/// User-configurable settings.
///
/// Loaded once at startup by merging the persisted blob over defaults and
/// persisted on every change by the settings UI. Passed by value into the
/// aggregator; nothing else mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Include PubMed in `all` searches
    pub pubmed_enabled: bool,
    /// Include ArXiv in `all` searches
    pub arxiv_enabled: bool,
    /// Include Wikipedia in `all` searches
    pub wikipedia_enabled: bool,
    /// Per-source result limit, clamped to [1, 20]
    pub max_results: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pubmed_enabled: true,
            arxiv_enabled: true,
            wikipedia_enabled: true,
            max_results: 5,
        }
    }
}

/// Persisted settings fields, all optional.
///
/// The persisted blob is merged shallowly: a field present in the blob wins,
/// a missing field keeps its default. There is no deeper validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartialSettings {
    pubmed_enabled: Option<bool>,
    arxiv_enabled: Option<bool>,
    wikipedia_enabled: Option<bool>,
    max_results: Option<u32>,
}

impl Settings {
    /// Load settings from a persisted JSON blob, merging field-by-field over
    /// defaults. An unreadable blob yields the defaults.
    pub fn from_blob(blob: &str) -> Self {
        let partial: PartialSettings = match serde_json::from_str(blob) {
            Ok(partial) => partial,
            Err(e) => {
                warn!("unreadable settings blob, using defaults: {}", e);
                PartialSettings::default()
            }
        };

        let defaults = Self::default();
        let mut settings = Self {
            pubmed_enabled: partial.pubmed_enabled.unwrap_or(defaults.pubmed_enabled),
            arxiv_enabled: partial.arxiv_enabled.unwrap_or(defaults.arxiv_enabled),
            wikipedia_enabled: partial
                .wikipedia_enabled
                .unwrap_or(defaults.wikipedia_enabled),
            max_results: partial.max_results.unwrap_or(defaults.max_results),
        };
        settings.max_results = settings.max_results.clamp(MIN_RESULTS, MAX_RESULTS);
        settings
    }

    /// Serialize for persistence.
    pub fn to_blob(&self) -> String {
        // Settings is four plain fields; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Whether the given source participates in `all` searches.
    pub fn is_enabled(&self, source: SourceName) -> bool {
        match source {
            SourceName::PubMed => self.pubmed_enabled,
            SourceName::ArXiv => self.arxiv_enabled,
            SourceName::Wikipedia => self.wikipedia_enabled,
        }
    }

    /// Flip one source's enable flag.
    pub fn set_enabled(&mut self, source: SourceName, enabled: bool) {
        match source {
            SourceName::PubMed => self.pubmed_enabled = enabled,
            SourceName::ArXiv => self.arxiv_enabled = enabled,
            SourceName::Wikipedia => self.wikipedia_enabled = enabled,
        }
    }

    /// Set the per-source result limit, clamped to the allowed range.
    pub fn set_max_results(&mut self, max_results: u32) {
        self.max_results = max_results.clamp(MIN_RESULTS, MAX_RESULTS);
    }
}
