//! Search query data models

use crate::results::SourceName;
use serde::{Deserialize, Serialize};

/// The caller's choice of which sources to include.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceSelector {
    /// Every source enabled in settings
    All,
    /// One named source, regardless of the other two flags
    Only(SourceName),
}

impl SourceSelector {
    /// Whether this selector names the given source.
    pub fn includes(&self, source: SourceName) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == source,
        }
    }
}

/// One search invocation: query text plus source selector.
///
/// Transient; built per invocation, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// The search query string
    pub text: String,
    /// Which sources to fan out to
    pub selector: SourceSelector,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, selector: SourceSelector) -> Self {
        Self {
            text: text.into(),
            selector,
        }
    }

    /// Query across all enabled sources.
    pub fn all(text: impl Into<String>) -> Self {
        Self::new(text, SourceSelector::All)
    }

    /// Query against one named source.
    pub fn only(text: impl Into<String>, source: SourceName) -> Self {
        Self::new(text, SourceSelector::Only(source))
    }

    /// A blank query must never reach the network.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
