//! Command surface wiring host actions to the search core

use super::{HostEditor, SettingsStore};
use crate::citation::format_citation;
use crate::config::Settings;
use crate::results::{AnnotatedRecord, SearchError, SourceName};
use crate::search::{SearchQuery, SourceSelector};
use anyhow::Result;
use tracing::warn;

/// The four invocable host actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Search the current selection across all enabled sources
    SearchSelection,
    /// Search biomedical literature only
    SearchPubMed,
    /// Search preprints only
    SearchArXiv,
    /// Search the encyclopedia only
    SearchWikipedia,
}

impl Command {
    /// Stable identifier for host command registration.
    pub fn id(&self) -> &'static str {
        match self {
            Self::SearchSelection => "search-selection",
            Self::SearchPubMed => "search-pubmed",
            Self::SearchArXiv => "search-arxiv",
            Self::SearchWikipedia => "search-wikipedia",
        }
    }

    /// Menu label shown by the host.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SearchSelection => "Search selected text",
            Self::SearchPubMed => "Search biomedical literature",
            Self::SearchArXiv => "Search preprints",
            Self::SearchWikipedia => "Search encyclopedia",
        }
    }

    /// Which sources this command fans out to.
    pub fn selector(&self) -> SourceSelector {
        match self {
            Self::SearchSelection => SourceSelector::All,
            Self::SearchPubMed => SourceSelector::Only(SourceName::PubMed),
            Self::SearchArXiv => SourceSelector::Only(SourceName::ArXiv),
            Self::SearchWikipedia => SourceSelector::Only(SourceName::Wikipedia),
        }
    }
}

/// Build the search query for a command from the current selection.
///
/// A blank selection is rejected here, before anything reaches the network.
pub fn query_for_command(
    command: Command,
    editor: &dyn HostEditor,
) -> Result<SearchQuery, SearchError> {
    let text = editor.selected_text().unwrap_or_default();
    let query = SearchQuery::new(text, command.selector());
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    Ok(query)
}

/// Format the picked record and hand the text to the editor.
pub fn insert_citation(editor: &mut dyn HostEditor, record: &AnnotatedRecord) -> Result<()> {
    editor.insert_at_cursor(&format_citation(record))
}

/// Load settings from the host store, merging the blob over defaults.
pub fn load_settings(store: &dyn SettingsStore) -> Settings {
    match store.load() {
        Ok(Some(blob)) => Settings::from_blob(&blob),
        Ok(None) => Settings::default(),
        Err(e) => {
            warn!("failed to load settings, using defaults: {}", e);
            Settings::default()
        }
    }
}

/// Persist settings immediately; called from every settings-UI mutation.
pub fn save_settings(store: &dyn SettingsStore, settings: &Settings) -> Result<()> {
    store.save(&settings.to_blob())
}
