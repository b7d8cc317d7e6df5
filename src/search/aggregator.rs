//! Search aggregation across the reference sources

use super::models::SearchQuery;
use crate::config::Settings;
use crate::network::HttpClient;
use crate::results::{AnnotatedRecord, Record, SearchError, SOURCE_ORDER};
use crate::sources::{Source, SourceRegistry};
use futures::future::try_join_all;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Aggregator fanning one query out to the included sources.
///
/// Results come back as one rankless sequence: each included source
/// contributes at most `settings.max_results` records, concatenated in the
/// fixed [`SOURCE_ORDER`] and tagged with their source. Failure is
/// all-or-nothing: one failing source fails the whole search rather than
/// silently dropping that source.
pub struct Aggregator {
    client: HttpClient,
    registry: Arc<SourceRegistry>,
}

impl Aggregator {
    pub fn new(client: HttpClient, registry: Arc<SourceRegistry>) -> Self {
        Self { client, registry }
    }

    /// Run one aggregated search.
    ///
    /// A blank query is rejected before any network call. An empty fan-out
    /// set (selector names a disabled source, or every source is disabled)
    /// yields an empty sequence with no network calls and no error.
    pub async fn aggregate(
        &self,
        query: &SearchQuery,
        settings: &Settings,
    ) -> Result<Vec<AnnotatedRecord>, SearchError> {
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let included: Vec<Arc<dyn Source>> = SOURCE_ORDER
            .iter()
            .copied()
            .filter(|&name| query.selector.includes(name) && settings.is_enabled(name))
            .filter_map(|name| self.registry.get(name).cloned())
            .collect();

        if included.is_empty() {
            debug!("no sources included for '{}', skipping search", query.text);
            return Ok(Vec::new());
        }

        info!(
            "searching '{}' across {} source(s)",
            query.text,
            included.len()
        );

        let limit = settings.max_results;
        let searches = included
            .iter()
            .map(|source| self.search_source(source, &query.text, limit));

        // All sources run concurrently; the first failure fails the whole
        // aggregation and no partial result set is returned.
        let per_source = try_join_all(searches).await?;

        let mut combined = Vec::new();
        for (source, mut records) in included.iter().zip(per_source) {
            records.truncate(limit as usize);
            debug!("{} contributed {} record(s)", source.name(), records.len());
            combined.extend(
                records
                    .into_iter()
                    .map(|record| AnnotatedRecord::new(record, source.name())),
            );
        }

        Ok(combined)
    }

    /// Search one source with a bounded timeout.
    async fn search_source(
        &self,
        source: &Arc<dyn Source>,
        text: &str,
        limit: u32,
    ) -> Result<Vec<Record>, SearchError> {
        let name = source.name();
        match timeout(self.client.timeout(), source.search(&self.client, text, limit)).await {
            Ok(Ok(records)) => Ok(records),
            Ok(Err(e)) => {
                warn!("{} failed: {}", name, e);
                Err(e)
            }
            Err(_) => {
                warn!("{} timed out", name);
                Err(SearchError::transport(name, "request timed out"))
            }
        }
    }
}
