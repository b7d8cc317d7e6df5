//! Search session state machine
//!
//! Tracks the lifecycle of the results view: `Idle → Searching → {Displayed,
//! Failed}`, re-entrant. A new search started from any state supersedes the
//! one in flight: `begin` hands out a generation token and `finish` applies
//! an outcome only while its token is still current, so a late answer from a
//! superseded search can never overwrite a newer display. The superseded
//! HTTP work is not aborted; its outcome is simply discarded.

use crate::results::{AnnotatedRecord, SearchError};
use tracing::debug;

/// Where the results view currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No search issued yet
    Idle,
    /// A search is in flight
    Searching,
    /// Results are on screen; an empty list is a valid display, not a failure
    Displayed(Vec<AnnotatedRecord>),
    /// The search failed; holds the user-visible message
    Failed(String),
}

/// Generation token identifying one search invocation.
pub type Generation = u64;

/// Results-view state machine.
#[derive(Debug)]
pub struct SearchSession {
    state: SessionState,
    generation: Generation,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_searching(&self) -> bool {
        self.state == SessionState::Searching
    }

    /// Start a search, superseding any search still in flight.
    pub fn begin(&mut self) -> Generation {
        self.generation += 1;
        self.state = SessionState::Searching;
        self.generation
    }

    /// Deliver a search outcome.
    ///
    /// Returns whether the outcome was applied; an outcome whose generation
    /// has been superseded is dropped.
    pub fn finish(
        &mut self,
        generation: Generation,
        outcome: Result<Vec<AnnotatedRecord>, SearchError>,
    ) -> bool {
        if generation != self.generation {
            debug!(
                "dropping stale search outcome (generation {} < {})",
                generation, self.generation
            );
            return false;
        }

        self.state = match outcome {
            Ok(records) => SessionState::Displayed(records),
            Err(e) => SessionState::Failed(e.to_string()),
        };
        true
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
