//! Error types for the search pipeline.

use thiserror::Error;

/// Errors returned by the paper-search backend.
///
/// `Timeout` is kept distinct from the other kinds because the query
/// handler degrades to a "try again" reply for it instead of the generic
/// failure path.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The search service answered with a non-success status.
    #[error("search service returned HTTP {0}")]
    Unavailable(u16),
    /// The transport reported a timeout before a response arrived.
    #[error("search request timed out")]
    Timeout,
    /// Any other transport-level failure.
    #[error("search transport failed: {0}")]
    Transport(String),
}

impl SearchError {
    /// Map a reqwest failure onto the taxonomy, preserving timeouts.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Timeout
        } else {
            SearchError::Transport(err.to_string())
        }
    }
}
