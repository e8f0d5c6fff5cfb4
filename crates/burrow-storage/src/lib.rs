//! Storage backends for the shortcode store.

pub mod memory;

pub use burrow_core::error::{Result, StorageError};
pub use burrow_core::repository::{Repository, UrlRecord};
pub use memory::InMemoryRepository;
