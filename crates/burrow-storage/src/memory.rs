use async_trait::async_trait;
use burrow_core::error::{Result, StorageError};
use burrow_core::repository::{Repository, UrlRecord};
use burrow_core::shortcode::ShortCode;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use jiff::Timestamp;
use tracing::{debug, trace};

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. A reservation holds the shard's write lock
/// from the vacancy check to the insert, so two reservations of the same
/// code can never both succeed, and readers only ever see complete records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: DashMap<ShortCode, UrlRecord>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of stored records, expired ones included.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Removes every record whose `expire_at` is at or before `now`.
    ///
    /// Records that are still active are never touched, so a purge cannot
    /// free a code before its expiry. Returns the number of removed records.
    pub fn purge_expired(&self, now: Timestamp) -> usize {
        let before = self.storage.len();
        self.storage.retain(|_, record| record.is_active_at(now));
        let purged = before.saturating_sub(self.storage.len());
        debug!(purged, "purged expired records");
        purged
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn reserve(&self, code: &ShortCode, record: UrlRecord) -> Result<()> {
        match self.storage.entry(code.clone()) {
            Entry::Occupied(_) => {
                trace!(code = %code, "reservation rejected, code taken");
                Err(StorageError::AlreadyExists(code.to_string()))
            }
            Entry::Vacant(slot) => {
                slot.insert(record);
                trace!(code = %code, "code reserved");
                Ok(())
            }
        }
    }

    async fn lookup(&self, code: &ShortCode) -> Result<UrlRecord> {
        self.storage
            .get(code)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StorageError::NotFound(code.to_string()))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.storage.contains_key(code))
    }
}
