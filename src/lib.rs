//! Citemark: reference search and Markdown citation core
//!
//! Searches three external reference services (PubMed, arXiv, Wikipedia)
//! from a note-taking editor and renders a chosen result as a Markdown
//! citation block for insertion at the cursor. The host editor supplies the
//! UI and persistence seams via the traits in [`host`].

pub mod citation;
pub mod config;
pub mod host;
pub mod network;
pub mod results;
pub mod search;
pub mod sources;

pub use citation::format_citation;
pub use config::Settings;
pub use results::{AnnotatedRecord, Record, SearchError, SourceName, SOURCE_ORDER};
pub use search::{Aggregator, SearchQuery, SearchSession, SessionState, SourceSelector};
pub use sources::{Source, SourceRegistry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
