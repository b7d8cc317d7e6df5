//! Configuration for the citation search core

mod settings;

pub use settings::{Settings, MAX_RESULTS, MIN_RESULTS};
