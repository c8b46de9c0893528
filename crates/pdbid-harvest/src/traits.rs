//! # Collaborator Traits
//!
//! The harvest driver talks to the outside world only through these two
//! traits. Implementations decide where content comes from (an archive
//! mirror, a local cache) and where it goes. The driver shares one instance
//! of each across all workers, hence `Send + Sync`.

use async_trait::async_trait;
use pdbid_core::PdbId;

use crate::error::{FetchError, StoreError};

/// Retrieves the content associated with one identifier.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the content for `id`.
    ///
    /// Return [`FetchError::NotFound`] when the identifier has no entry and
    /// [`FetchError::Transient`] for failures worth retrying.
    async fn fetch(&self, id: &PdbId) -> Result<Vec<u8>, FetchError>;
}

/// Persists the content fetched for one identifier.
#[async_trait]
pub trait Store: Send + Sync {
    /// Store `content` for `id`. Called at most once per identifier per run.
    async fn store(&self, id: &PdbId, content: &[u8]) -> Result<(), StoreError>;
}
