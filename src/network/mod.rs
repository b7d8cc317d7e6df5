//! Outbound networking

mod client;

pub use client::{HttpClient, DEFAULT_TIMEOUT, MAX_TIMEOUT};
