//! Client for the remote structured-log sink.
//!
//! Entries are `{stack, level, package, message}` documents posted as JSON to
//! a collector. Delivery is best-effort: every failure is reported through
//! `tracing` and dropped, so callers never observe it.

pub mod entry;
pub mod error;
pub mod remote;
pub mod sink;

pub use entry::{Level, LogEntry, Package, Stack};
pub use error::LogError;
pub use remote::{RemoteLogClient, RemoteLogConfig};
pub use sink::{LogSink, NoopSink};
