//! arXiv source adapter
//!
//! Searches the preprint index. Results typically carry a `summary` as the
//! descriptive text and a full `date` rather than a bare year.

use super::{wire, Source, SourceRequest, SourceResponse};
use crate::results::{Record, SearchError, SourceName};

const API_URL: &str = "https://api.citemark.dev/arxiv";

/// arXiv preprint adapter
pub struct ArXiv {
    api_url: String,
}

impl ArXiv {
    pub fn new() -> Self {
        Self {
            api_url: API_URL.to_string(),
        }
    }

    /// Point the adapter at a different endpoint (tests, self-hosted proxy).
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }
}

impl Default for ArXiv {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for ArXiv {
    fn name(&self) -> SourceName {
        SourceName::ArXiv
    }

    fn request(&self, query: &str, limit: u32) -> SourceRequest {
        SourceRequest::get(format!("{}/search", self.api_url))
            .param("q", query)
            .param("limit", limit.to_string())
    }

    fn parse_response(&self, response: SourceResponse) -> Result<Vec<Record>, SearchError> {
        wire::parse_results(self.name(), &response)
    }
}
