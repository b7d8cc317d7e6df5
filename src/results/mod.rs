//! Result types shared across adapters, aggregation and formatting

mod types;

pub use types::*;
