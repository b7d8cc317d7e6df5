//! Source adapter traits and request/response types

use crate::network::HttpClient;
use crate::results::{Record, SearchError, SourceName};
use async_trait::async_trait;

/// HTTP request to be made for a source search.
#[derive(Debug, Clone)]
pub struct SourceRequest {
    /// URL to request (without query string)
    pub url: String,
    /// Query parameters, percent-encoded by the client
    pub params: Vec<(String, String)>,
}

impl SourceRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: Vec::new(),
        }
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Render the full URL with encoded query string, for logging and tests.
    pub fn full_url(&self) -> String {
        if self.params.is_empty() {
            return self.url.clone();
        }
        let query = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.url, query)
    }
}

/// HTTP response from a source request.
#[derive(Debug)]
pub struct SourceResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl SourceResponse {
    /// Check if the response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A reference source adapter.
///
/// Each adapter translates one remote service's query/response contract into
/// the canonical [`Record`] shape. Adapters are stateless: one outbound call
/// per search, nothing retained between calls, no retries.
#[async_trait]
pub trait Source: Send + Sync {
    /// Which source this adapter serves.
    fn name(&self) -> SourceName;

    /// Build the HTTP request for a search.
    fn request(&self, query: &str, limit: u32) -> SourceRequest;

    /// Parse the HTTP response into normalized records.
    ///
    /// A missing `results` key is zero hits, not an error; a non-2xx status
    /// or malformed JSON is a [`SearchError::Transport`].
    fn parse_response(&self, response: SourceResponse) -> Result<Vec<Record>, SearchError>;

    /// Search the remote service: build, execute, parse.
    async fn search(
        &self,
        client: &HttpClient,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Record>, SearchError> {
        let request = self.request(query, limit);
        let response = client
            .execute(request)
            .await
            .map_err(|e| SearchError::transport(self.name(), e.to_string()))?;
        self.parse_response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url_encodes_query() {
        let request = SourceRequest::get("https://example.org/search")
            .param("q", "gene editing & repair")
            .param("limit", "5");

        assert_eq!(
            request.full_url(),
            "https://example.org/search?q=gene%20editing%20%26%20repair&limit=5"
        );
    }

    #[test]
    fn test_full_url_without_params() {
        let request = SourceRequest::get("https://example.org/search");
        assert_eq!(request.full_url(), "https://example.org/search");
    }

    #[test]
    fn test_response_success_range() {
        let ok = SourceResponse {
            status: 204,
            text: String::new(),
        };
        assert!(ok.is_success());

        let not_found = SourceResponse {
            status: 404,
            text: String::new(),
        };
        assert!(!not_found.is_success());
    }
}
