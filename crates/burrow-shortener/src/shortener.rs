use crate::error::Result;
use async_trait::async_trait;
use burrow_core::ShortCode;
use jiff::Timestamp;

/// Parameters for creating a shortened URL, as received from a caller.
///
/// Fields are unvalidated; [`Shortener::create`] checks them in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateParams {
    /// The original URL to be shortened.
    pub original_url: String,
    /// The caller-chosen short code.
    pub short_code: String,
    /// Requested lifetime. Defaults to 30 days when absent.
    pub validity: RequestedValidity,
}

/// Lifetime as received from a caller, before it is checked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestedValidity {
    #[default]
    Absent,
    Days(i64),
    /// Anything that is not a whole number of days, kept as received.
    Malformed(String),
}

impl From<Option<i64>> for RequestedValidity {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::Absent, Self::Days)
    }
}

/// Descriptor of a freshly created short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub short_code: ShortCode,
    /// Fully qualified link that resolves to the original URL.
    pub short_url: String,
    pub created_at: Timestamp,
    pub expire_at: Timestamp,
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Validates `params` and reserves the requested short code.
    async fn create(&self, params: CreateParams) -> Result<ShortUrl>;

    /// Resolves a short code to the original URL while it is active.
    async fn resolve(&self, code: &str) -> Result<String>;
}
