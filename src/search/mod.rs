//! Search aggregation and session tracking

mod aggregator;
mod models;
mod session;

pub use aggregator::Aggregator;
pub use models::{SearchQuery, SourceSelector};
pub use session::{Generation, SearchSession, SessionState};
