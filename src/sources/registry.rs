//! Registry of the available source adapters

use super::traits::Source;
use super::{ArXiv, PubMed, Wikipedia};
use crate::results::{SourceName, SOURCE_ORDER};
use std::collections::HashMap;
use std::sync::Arc;

/// The source adapters, keyed by source name.
///
/// Iteration always follows [`SOURCE_ORDER`] so aggregation output order
/// never depends on which adapter answers first.
pub struct SourceRegistry {
    sources: HashMap<SourceName, Arc<dyn Source>>,
}

impl SourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    /// Create a registry with the three standard adapters installed.
    pub fn with_default_sources() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PubMed::new()));
        registry.register(Arc::new(ArXiv::new()));
        registry.register(Arc::new(Wikipedia::new()));
        registry
    }

    /// Register an adapter, replacing any previous one for the same source.
    pub fn register(&mut self, source: Arc<dyn Source>) {
        self.sources.insert(source.name(), source);
    }

    /// Get the adapter for a source.
    pub fn get(&self, name: SourceName) -> Option<&Arc<dyn Source>> {
        self.sources.get(&name)
    }

    /// Registered adapters in fixed source order.
    pub fn in_order(&self) -> impl Iterator<Item = &Arc<dyn Source>> {
        SOURCE_ORDER.iter().filter_map(|name| self.sources.get(name))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::with_default_sources()
    }
}
