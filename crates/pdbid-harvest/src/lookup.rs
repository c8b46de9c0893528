//! # Random Lookup
//!
//! Draws identifiers uniformly from a range until the archive has one.
//! Most of the identifier space is unassigned, so a draw usually misses;
//! the search is bounded by a draw budget instead of looping forever.

use pdbid_core::{IdRange, PdbId};
use rand::Rng;

use crate::config::HarvestConfig;
use crate::error::{FetchError, LookupError};
use crate::retry::retry_transient;
use crate::traits::Fetcher;

/// An identifier that was found, with its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomHit {
    pub id: PdbId,
    pub content: Vec<u8>,
    /// Draws made, including the successful one.
    pub draws: u32,
}

/// Fetch randomly drawn identifiers from `range` until one exists.
///
/// A [`FetchError::NotFound`] moves on to the next draw. Transient
/// failures are retried per [`HarvestConfig`]; if retries run out, that
/// draw counts as a miss too.
///
/// # Errors
///
/// Returns [`LookupError::Exhausted`] after `max_draws` misses.
pub async fn find_random<F, R>(
    fetcher: &F,
    range: &IdRange,
    rng: &mut R,
    config: &HarvestConfig,
    max_draws: u32,
) -> Result<RandomHit, LookupError>
where
    F: Fetcher + ?Sized,
    R: Rng + ?Sized,
{
    let mut last_error: Option<FetchError> = None;
    for draw in 1..=max_draws {
        let id = range.sample(rng);
        tracing::debug!(%id, draw, max_draws, "trying random identifier");
        let retried = retry_transient(config, || fetcher.fetch(&id)).await;
        match retried.result {
            Ok(content) => {
                tracing::info!(%id, draws = draw, bytes = content.len(), "found random identifier");
                return Ok(RandomHit {
                    id,
                    content,
                    draws: draw,
                });
            }
            Err(e @ FetchError::NotFound(_)) => last_error = Some(e),
            Err(e) => {
                tracing::warn!(%id, attempts = retried.attempts, "giving up on draw: {e}");
                last_error = Some(e);
            }
        }
    }
    Err(LookupError::Exhausted {
        draws: max_draws,
        last_error,
    })
}
