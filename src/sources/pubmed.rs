//! PubMed source adapter
//!
//! Searches the biomedical literature index. Results carry an `abstract`
//! field as the descriptive text and usually a `year`.

use super::{wire, Source, SourceRequest, SourceResponse};
use crate::results::{Record, SearchError, SourceName};

const API_URL: &str = "https://api.citemark.dev/pubmed";

/// PubMed biomedical literature adapter
pub struct PubMed {
    api_url: String,
}

impl PubMed {
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

impl Default for PubMed {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for PubMed {
    fn name(&self) -> SourceName {
        SourceName::PubMed
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pubmed_request() {
        let pubmed = PubMed::new();
        let request = pubmed.request("CRISPR gene editing", 5);

        assert_eq!(request.url, "https://api.citemark.dev/pubmed/search");
        assert!(request
            .full_url()
            .ends_with("/search?q=CRISPR%20gene%20editing&limit=5"));
    }

    #[test]
    fn test_pubmed_parse_abstract_and_year() {
        let pubmed = PubMed::new();
        let response = SourceResponse {
            status: 200,
            text: r#"{"results": [{
                "title": "CRISPR-Cas9 off-target effects",
                "authors": ["Zhang F", "Doudna JA"],
                "year": "2021",
                "url": "https://pubmed.test/34001234",
                "abstract": "Off-target cleavage remains a concern."
            }]}"#
                .to_string(),
        };

        let records = pubmed.parse_response(response).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("CRISPR-Cas9 off-target effects"));
        assert_eq!(records[0].authors, vec!["Zhang F", "Doudna JA"]);
        assert_eq!(records[0].year.as_deref(), Some("2021"));
        assert_eq!(
            records[0].summary.as_deref(),
            Some("Off-target cleavage remains a concern.")
        );
    }

    #[test]
    fn test_pubmed_zero_hits() {
        let pubmed = PubMed::new();
        let response = SourceResponse {
            status: 200,
            text: r#"{"count": 0}"#.to_string(),
        };
        assert!(pubmed.parse_response(response).unwrap().is_empty());
    }
}
