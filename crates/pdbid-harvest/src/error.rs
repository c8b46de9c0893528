//! Harvest error types.
//!
//! Fetch and store failures are per-identifier: they are recorded in the
//! [`HarvestReport`](crate::HarvestReport) and never abort a run.

use pdbid_core::PdbId;

/// Errors returned by a [`Fetcher`](crate::Fetcher).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The archive has no entry for this identifier. Not retried.
    #[error("no entry for {0}")]
    NotFound(PdbId),
    /// A failure that may succeed on retry (timeouts, dropped connections).
    #[error("transient failure: {0}")]
    Transient(String),
}

impl FetchError {
    /// Whether the failure is worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

/// Errors returned by a [`Store`](crate::Store).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store refused the content.
    #[error("store rejected {id}: {reason}")]
    Rejected { id: PdbId, reason: String },
    /// The store has no room left.
    #[error("store is full ({capacity} entries)")]
    Full { capacity: usize },
}

/// Errors that abort a whole harvest run.
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    /// A worker task panicked or was cancelled.
    #[error("harvest worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
    /// The concurrency limiter was closed underneath the run.
    #[error("concurrency limiter closed")]
    LimiterClosed(#[from] tokio::sync::AcquireError),
}

/// Errors from [`find_random`](crate::find_random).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// Every draw missed.
    #[error("no identifier found after {draws} draws")]
    Exhausted {
        draws: u32,
        /// Failure seen on the final draw, if any draw was made.
        last_error: Option<FetchError>,
    },
}
