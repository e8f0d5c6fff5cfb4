//! URL shortener service implementation.
//!
//! This crate validates creation requests, reserves short codes through a
//! [`Repository`](burrow_core::Repository) and enforces expiry when codes are
//! resolved. Core types are re-exported from `burrow_core`.

pub mod error;
pub mod service;
pub mod shortener;

pub use burrow_core::{ShortCode, UrlRecord, ValidityDays};
pub use error::ShortenerError;
pub use service::ShortenerService;
pub use shortener::{CreateParams, RequestedValidity, ShortUrl, Shortener};
