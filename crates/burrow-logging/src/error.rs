use crate::entry::{Package, Stack};
use thiserror::Error;

/// Result type for log delivery.
pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("package '{package}' is not allowed for the {stack} stack")]
    InvalidPackage { stack: Stack, package: Package },
    #[error("log client could not be built: {0}")]
    Client(#[source] reqwest::Error),
    #[error("log request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("log collector answered {status}: {body}")]
    Status { status: u16, body: String },
}
