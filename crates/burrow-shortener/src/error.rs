use burrow_core::{CoreError, StorageError};
use thiserror::Error;

/// Result type for shortener operations.
pub type Result<T> = std::result::Result<T, ShortenerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid short code: {0}")]
    InvalidShortcode(String),
    #[error("invalid validity: {0}")]
    InvalidValidity(String),
    #[error("short code already exists: {0}")]
    AlreadyExists(String),
    #[error("short code not found: {0}")]
    NotFound(String),
    #[error("short code expired: {0}")]
    Expired(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<CoreError> for ShortenerError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidShortCode(message) => Self::InvalidShortcode(message),
            CoreError::InvalidValidity(message) => Self::InvalidValidity(message),
        }
    }
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::AlreadyExists(code) => Self::AlreadyExists(code),
            StorageError::NotFound(code) => Self::NotFound(code),
            other => Self::Storage(other.to_string()),
        }
    }
}
