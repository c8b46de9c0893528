//! # pdbid-harvest — Range Harvesting
//!
//! Consumes the identifiers of a resolved [`pdbid_core::IdRange`] and hands
//! each one to a pluggable [`Fetcher`] and [`Store`]. The crate ships no
//! network or filesystem implementations; callers provide them.
//!
//! ## Guarantees
//!
//! - Every identifier in the range gets exactly one [`Outcome`].
//! - A failed fetch or store for one identifier never prevents processing
//!   of the others.
//! - Only transient fetch failures are retried, with exponential backoff.
//! - At most [`HarvestConfig::concurrency`] identifiers are in flight.
//!
//! [`find_random`] covers the single-identifier case: draw identifiers
//! from a range until one is found, within a draw budget.
//!
//! ```no_run
//! use pdbid_harvest::{Fetcher, FetchError, HarvestConfig, Harvester, MemoryStore};
//! use pdbid_core::PdbId;
//!
//! struct Echo;
//!
//! #[async_trait::async_trait]
//! impl Fetcher for Echo {
//!     async fn fetch(&self, id: &PdbId) -> Result<Vec<u8>, FetchError> {
//!         Ok(id.as_str().as_bytes().to_vec())
//!     }
//! }
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let range = pdbid_core::resolve("1a*", Some("1a0z"))?;
//! let harvester = Harvester::new(Echo, MemoryStore::new(), HarvestConfig::default());
//! let report = harvester.run(&range).await?;
//! assert_eq!(report.summary().stored, 36);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod harvester;
pub mod lookup;
mod retry;
pub mod store;
pub mod traits;

pub use config::{ConfigError, HarvestConfig};
pub use error::{FetchError, HarvestError, LookupError, StoreError};
pub use harvester::{HarvestEntry, HarvestReport, HarvestSummary, Harvester, Outcome};
pub use lookup::{find_random, RandomHit};
pub use store::MemoryStore;
pub use traits::{Fetcher, Store};
