//! Source adapter module
//!
//! Defines the Source trait and one adapter per reference service.

mod registry;
mod traits;
mod wire;

// Adapter implementations
pub mod arxiv;
pub mod pubmed;
pub mod wikipedia;

pub use arxiv::ArXiv;
pub use pubmed::PubMed;
pub use registry::SourceRegistry;
pub use traits::*;
pub use wikipedia::Wikipedia;
