//! Core types and traits for the Burrow URL shortener.
//!
//! This crate provides the shared vocabulary used by the storage backend,
//! the shortener service and the HTTP gateway: validated short codes, the
//! stored record, the validity policy, the clock abstraction and the
//! repository contract.

pub mod clock;
pub mod error;
pub mod repository;
pub mod shortcode;
pub mod validity;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CoreError, StorageError};
pub use repository::{Repository, UrlRecord};
pub use shortcode::ShortCode;
pub use validity::ValidityDays;
