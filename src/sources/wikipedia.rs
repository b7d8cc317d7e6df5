//! Wikipedia source adapter
//!
//! Searches the encyclopedia index. Results carry a `snippet` as the
//! descriptive text and no author or date information.

use super::{wire, Source, SourceRequest, SourceResponse};
use crate::results::{Record, SearchError, SourceName};

const API_URL: &str = "https://api.citemark.dev/wikipedia";

/// Wikipedia encyclopedia adapter
pub struct Wikipedia {
    api_url: String,
}

impl Wikipedia {
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

impl Default for Wikipedia {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for Wikipedia {
    fn name(&self) -> SourceName {
        SourceName::Wikipedia
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
