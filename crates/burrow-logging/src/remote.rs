use crate::entry::LogEntry;
use crate::error::{LogError, Result};
use crate::sink::LogSink;
use reqwest::Url;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for the remote log collector.
///
/// # Example
///
/// ```rust
/// use burrow_logging::RemoteLogConfig;
///
/// let config = RemoteLogConfig::builder()
///     .endpoint("http://127.0.0.1:9000/logs".parse().unwrap())
///     .token("secret")
///     .build();
/// assert_eq!(config.token.as_deref(), Some("secret"));
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct RemoteLogConfig {
    /// Collector URL the entries are POSTed to.
    pub endpoint: Url,

    /// Bearer token sent in the `Authorization` header, if any. A leading
    /// `Bearer ` is accepted and not repeated.
    #[builder(default, setter(strip_option, into))]
    pub token: Option<String>,

    /// Per-request timeout.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}

/// HTTP client for the remote log collector.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct RemoteLogClient {
    http: reqwest::Client,
    config: Arc<RemoteLogConfig>,
}

impl RemoteLogClient {
    pub fn new(config: RemoteLogConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(LogError::Client)?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &RemoteLogConfig {
        &self.config
    }

    /// Validates and delivers one entry, waiting for the collector's answer.
    pub async fn send(&self, entry: &LogEntry) -> Result<()> {
        entry.validate()?;

        let mut request = self.http.post(self.config.endpoint.clone()).json(entry);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(bearer_token(token));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(
            stack = %entry.stack,
            level = %entry.level,
            package = %entry.package,
            status = status.as_u16(),
            "log entry delivered"
        );
        Ok(())
    }
}

fn bearer_token(token: &str) -> &str {
    let token = token.trim();
    token
        .strip_prefix("Bearer ")
        .map_or(token, str::trim_start)
}

impl LogSink for RemoteLogClient {
    fn emit(&self, entry: LogEntry) {
        if let Err(e) = entry.validate() {
            warn!(error = %e, "dropping invalid log entry");
            return;
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("no async runtime available, dropping log entry");
            return;
        };

        let client = self.clone();
        runtime.spawn(async move {
            if let Err(e) = client.send(&entry).await {
                warn!(error = %e, "log transmission failed");
            }
        });
    }
}
