//! # Harvest Driver
//!
//! Feeds every identifier of a resolved [`IdRange`] through a [`Fetcher`]
//! and, on success, a [`Store`]. Identifiers are processed independently:
//! a failure for one never stops the others, and every identifier ends up
//! with exactly one [`Outcome`] in the report.
//!
//! Work is bounded by a semaphore sized from
//! [`HarvestConfig::concurrency`]. A permit is taken before each worker is
//! spawned, so at most that many identifiers are in flight and the range
//! is never materialized up front.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use pdbid_core::{IdRange, PdbId};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use uuid::Uuid;

use crate::config::HarvestConfig;
use crate::error::{FetchError, HarvestError};
use crate::retry::retry_transient;
use crate::traits::{Fetcher, Store};

/// What happened to one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Fetched and stored.
    Stored {
        bytes: usize,
        /// Hex SHA-256 of the stored content.
        sha256: String,
        attempts: u32,
    },
    /// The archive has no entry for the identifier.
    NotFound { attempts: u32 },
    /// Fetching failed after all retries.
    FetchFailed { error: String, attempts: u32 },
    /// Fetched, but the store refused the content.
    StoreFailed { error: String, attempts: u32 },
}

/// One identifier and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarvestEntry {
    pub id: PdbId,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Outcome counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HarvestSummary {
    pub stored: usize,
    pub not_found: usize,
    pub fetch_failed: usize,
    pub store_failed: usize,
}

impl HarvestSummary {
    /// Total identifiers accounted for.
    pub fn total(&self) -> usize {
        self.stored + self.not_found + self.fetch_failed + self.store_failed
    }
}

/// Result of a harvest run.
#[derive(Debug, Clone, Serialize)]
pub struct HarvestReport {
    pub run_id: Uuid,
    pub range: IdRange,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// One entry per identifier of the range, in increasing order.
    pub entries: Vec<HarvestEntry>,
}

impl HarvestReport {
    /// Count outcomes by kind.
    pub fn summary(&self) -> HarvestSummary {
        let mut summary = HarvestSummary::default();
        for entry in &self.entries {
            match entry.outcome {
                Outcome::Stored { .. } => summary.stored += 1,
                Outcome::NotFound { .. } => summary.not_found += 1,
                Outcome::FetchFailed { .. } => summary.fetch_failed += 1,
                Outcome::StoreFailed { .. } => summary.store_failed += 1,
            }
        }
        summary
    }

    /// Outcome recorded for `id`.
    pub fn outcome(&self, id: &PdbId) -> Option<&Outcome> {
        self.entries
            .binary_search_by(|entry| entry.id.cmp(id))
            .ok()
            .map(|i| &self.entries[i].outcome)
    }
}

/// Drives fetch and store over identifier ranges.
pub struct Harvester<F, S> {
    fetcher: Arc<F>,
    store: Arc<S>,
    config: HarvestConfig,
}

impl<F, S> Harvester<F, S>
where
    F: Fetcher + 'static,
    S: Store + 'static,
{
    /// Create a harvester owning its collaborators.
    pub fn new(fetcher: F, store: S, config: HarvestConfig) -> Self {
        Self::with_shared(Arc::new(fetcher), Arc::new(store), config)
    }

    /// Create a harvester over shared collaborators.
    pub fn with_shared(fetcher: Arc<F>, store: Arc<S>, config: HarvestConfig) -> Self {
        Self {
            fetcher,
            store,
            config,
        }
    }

    /// The shared store, for inspection after a run.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Harvest every identifier in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError`] only if a worker task panics. Fetch and
    /// store failures are recorded in the report instead.
    pub async fn run(&self, range: &IdRange) -> Result<HarvestReport, HarvestError> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        tracing::info!(
            %run_id,
            %range,
            identifiers = range.len(),
            concurrency = self.config.concurrency,
            "starting harvest"
        );

        let semaphore = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let mut join_set: JoinSet<HarvestEntry> = JoinSet::new();
        let mut entries = Vec::with_capacity(range.len());

        for id in range.iter() {
            let permit = Arc::clone(&semaphore).acquire_owned().await?;
            let fetcher = Arc::clone(&self.fetcher);
            let store = Arc::clone(&self.store);
            let config = self.config.clone();
            join_set.spawn(async move {
                let _permit = permit;
                let outcome = harvest_one(fetcher.as_ref(), store.as_ref(), &config, id).await;
                HarvestEntry { id, outcome }
            });
            while let Some(done) = join_set.try_join_next() {
                entries.push(done?);
            }
        }
        while let Some(done) = join_set.join_next().await {
            entries.push(done?);
        }

        entries.sort_by_key(|entry| entry.id);
        let report = HarvestReport {
            run_id,
            range: *range,
            started_at,
            finished_at: Utc::now(),
            entries,
        };
        let summary = report.summary();
        tracing::info!(
            %run_id,
            stored = summary.stored,
            not_found = summary.not_found,
            fetch_failed = summary.fetch_failed,
            store_failed = summary.store_failed,
            "harvest finished"
        );
        Ok(report)
    }
}

async fn harvest_one<F, S>(fetcher: &F, store: &S, config: &HarvestConfig, id: PdbId) -> Outcome
where
    F: Fetcher + ?Sized,
    S: Store + ?Sized,
{
    let retried = retry_transient(config, || fetcher.fetch(&id)).await;
    let attempts = retried.attempts;
    let content = match retried.result {
        Ok(content) => content,
        Err(FetchError::NotFound(_)) => {
            tracing::debug!(%id, "not found");
            return Outcome::NotFound { attempts };
        }
        Err(e) => {
            tracing::warn!(%id, attempts, "fetch failed: {e}");
            return Outcome::FetchFailed {
                error: e.to_string(),
                attempts,
            };
        }
    };

    match store.store(&id, &content).await {
        Ok(()) => {
            tracing::debug!(%id, bytes = content.len(), "stored");
            Outcome::Stored {
                bytes: content.len(),
                sha256: hex_digest(&content),
                attempts,
            }
        }
        Err(e) => {
            tracing::warn!(%id, "store failed: {e}");
            Outcome::StoreFailed {
                error: e.to_string(),
                attempts,
            }
        }
    }
}

fn hex_digest(content: &[u8]) -> String {
    Sha256::digest(content)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
