//! In-memory [`Store`] implementation.
//!
//! Keeps fetched content in an ordered map keyed by identifier. Useful for
//! dry runs and tests; an optional capacity makes it refuse content once
//! full.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use pdbid_core::PdbId;

use crate::error::StoreError;
use crate::traits::Store;

/// A [`Store`] backed by a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<PdbId, Vec<u8>>>,
    capacity: Option<usize>,
}

impl MemoryStore {
    /// An unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that holds at most `capacity` identifiers.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
            capacity: Some(capacity),
        }
    }

    /// Content stored for `id`, if any.
    pub fn get(&self, id: &PdbId) -> Option<Vec<u8>> {
        self.entries.lock().get(id).cloned()
    }

    /// Number of identifiers stored.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Stored identifiers in increasing order.
    pub fn ids(&self) -> Vec<PdbId> {
        self.entries.lock().keys().copied().collect()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn store(&self, id: &PdbId, content: &[u8]) -> Result<(), StoreError> {
        let mut entries = self.entries.lock();
        if let Some(capacity) = self.capacity {
            if entries.len() >= capacity && !entries.contains_key(id) {
                return Err(StoreError::Full { capacity });
            }
        }
        entries.insert(*id, content.to_vec());
        Ok(())
    }
}
