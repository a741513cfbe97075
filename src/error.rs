//! Error types for dispatch and backend calls.
//!
//! There are exactly two failure categories: an action string outside the
//! recognized set (rejected before any backend call), and a backend failure,
//! which propagates unchanged. The adapter never retries, wraps, or recovers.

/// Failure of a dispatched action.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The action string is not one of the seven recognized kinds. Raised
    /// before a service handle is obtained; the backend is never contacted.
    #[error("unsupported action type {0}")]
    UnsupportedAction(String),

    /// Rejection from the backend service, surfaced as-is.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
