use crate::error::{Result, ShortenerError};
use crate::shortener::{CreateParams, RequestedValidity, ShortUrl, Shortener};
use async_trait::async_trait;
use burrow_core::{Clock, Repository, ShortCode, SystemClock, UrlRecord, ValidityDays};
use burrow_logging::{Level, LogEntry, LogSink, NoopSink, Package};
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` to handle:
/// - Request validation (URL, then short code, then validity)
/// - Expiry computation from the injected [`Clock`]
/// - Expiry enforcement on resolution
///
/// Every outcome is also reported to the injected [`LogSink`]. The sink is
/// fire-and-forget and cannot change what the caller receives.
pub struct ShortenerService<R, C = SystemClock> {
    repository: Arc<R>,
    clock: C,
    log_sink: Arc<dyn LogSink>,
    base_url: String,
}

impl<R: Repository> ShortenerService<R, SystemClock> {
    /// Creates a service on the system clock with no remote log sink.
    ///
    /// `base_url` is the public prefix short links are built on,
    /// e.g. `http://localhost:5000/api`.
    pub fn new(repository: R, base_url: impl Into<String>) -> Self {
        Self {
            repository: Arc::new(repository),
            clock: SystemClock,
            log_sink: Arc::new(NoopSink),
            base_url: base_url.into(),
        }
    }
}

impl<R: Repository, C: Clock> ShortenerService<R, C> {
    /// Replaces the clock used for creation timestamps and expiry checks.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> ShortenerService<R, C2> {
        ShortenerService {
            repository: self.repository,
            clock,
            log_sink: self.log_sink,
            base_url: self.base_url,
        }
    }

    pub fn with_log_sink(mut self, log_sink: Arc<dyn LogSink>) -> Self {
        self.log_sink = log_sink;
        self
    }

    /// Returns a reference to the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validates that the URL is absolute, uses http(s) and names a host.
    /// Expects an already trimmed URL.
    fn validate_url(url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(ShortenerError::InvalidUrl(
                "URL cannot be empty".to_string(),
            ));
        }

        let parsed = Url::parse(url)
            .map_err(|e| ShortenerError::InvalidUrl(format!("'{}': {}", url, e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL scheme must be http or https: {}",
                parsed.scheme()
            )));
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL must have a host: {}",
                url
            )));
        }

        Ok(())
    }

    fn validate_validity(requested: RequestedValidity) -> Result<ValidityDays> {
        match requested {
            RequestedValidity::Absent => Ok(ValidityDays::default()),
            RequestedValidity::Days(days) => Ok(ValidityDays::new(days)?),
            RequestedValidity::Malformed(raw) => Err(ShortenerError::InvalidValidity(format!(
                "validity must be a whole number of days, got {}",
                raw
            ))),
        }
    }

    fn report(&self, level: Level, message: String) {
        self.log_sink
            .emit(LogEntry::backend(level, Package::Service, message));
    }

    fn reject(&self, error: ShortenerError) -> ShortenerError {
        warn!(error = %error, "request rejected");
        self.report(Level::Warn, error.to_string());
        error
    }
}

#[async_trait]
impl<R: Repository, C: Clock> Shortener for ShortenerService<R, C> {
    async fn create(&self, params: CreateParams) -> Result<ShortUrl> {
        let CreateParams {
            original_url,
            short_code,
            validity,
        } = params;
        let original_url = original_url.trim();

        // All validation happens before the repository is touched.
        Self::validate_url(original_url).map_err(|e| self.reject(e))?;
        let code = ShortCode::new(short_code).map_err(|e| self.reject(e.into()))?;
        let validity = Self::validate_validity(validity).map_err(|e| self.reject(e))?;

        let record = UrlRecord::new(code.clone(), original_url, self.clock.now(), validity);
        let created_at = record.created_at;
        let expire_at = record.expire_at;
        let original_url = record.original_url.clone();

        self.repository
            .reserve(&code, record)
            .await
            .map_err(|e| self.reject(e.into()))?;

        let short_url = code.to_url(&self.base_url);
        info!(
            code = %code,
            url = %original_url,
            validity = %validity,
            expire_at = %expire_at,
            "short url created"
        );
        self.report(
            Level::Info,
            format!("created short url {} for {}", short_url, original_url),
        );

        Ok(ShortUrl {
            short_code: code,
            short_url,
            created_at,
            expire_at,
        })
    }

    async fn resolve(&self, code: &str) -> Result<String> {
        // A code outside the allowed format can never have been reserved.
        let Ok(code) = ShortCode::new(code) else {
            return Err(self.reject(ShortenerError::NotFound(code.to_string())));
        };

        let record = self
            .repository
            .lookup(&code)
            .await
            .map_err(|e| self.reject(e.into()))?;

        let now = self.clock.now();
        if !record.is_active_at(now) {
            debug!(code = %code, expire_at = %record.expire_at, "record has expired");
            return Err(self.reject(ShortenerError::Expired(code.to_string())));
        }

        debug!(code = %code, url = %record.original_url, "resolved short code");
        self.report(
            Level::Info,
            format!("resolved {} to {}", code, record.original_url),
        );
        Ok(record.original_url)
    }
}
