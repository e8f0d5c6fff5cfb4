use crate::error::Result;
use crate::shortcode::ShortCode;
use crate::validity::ValidityDays;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::Serialize;

/// A stored URL record in the repository.
///
/// Only [`UrlRecord::new`] builds records, so `expire_at` always matches
/// `created_at + validity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    /// The key this record was reserved under.
    pub short_code: ShortCode,
    /// The original URL that was shortened.
    pub original_url: String,
    /// When the record was created.
    pub created_at: Timestamp,
    /// Lifetime requested at creation.
    pub validity: ValidityDays,
    /// `created_at + validity`, fixed at creation.
    pub expire_at: Timestamp,
}

impl UrlRecord {
    /// Builds a record whose expiry is derived from `created_at` and `validity`.
    pub fn new(
        short_code: ShortCode,
        original_url: impl Into<String>,
        created_at: Timestamp,
        validity: ValidityDays,
    ) -> Self {
        Self {
            short_code,
            original_url: original_url.into(),
            created_at,
            validity,
            expire_at: created_at + validity.as_duration(),
        }
    }

    /// A record is active strictly before its expiry instant.
    pub fn is_active_at(&self, now: Timestamp) -> bool {
        now < self.expire_at
    }
}

/// The shortcode store.
///
/// Implementations are pure mappings: they never interpret `expire_at`,
/// which is a policy decision left to the caller.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Inserts `record` under `code` only if the code is absent.
    ///
    /// Returns `Err(AlreadyExists)` otherwise. Concurrent reservations of the
    /// same code must let at most one caller succeed.
    async fn reserve(&self, code: &ShortCode, record: UrlRecord) -> Result<()>;

    /// Returns the stored record verbatim, whether or not it has expired.
    /// Returns `Err(NotFound)` if the code was never reserved.
    async fn lookup(&self, code: &ShortCode) -> Result<UrlRecord>;

    /// Checks whether a short code is currently reserved.
    async fn exists(&self, code: &ShortCode) -> Result<bool>;
}
