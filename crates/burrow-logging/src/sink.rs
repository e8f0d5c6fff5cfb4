use crate::entry::LogEntry;

/// Destination for structured log entries.
///
/// `emit` is fire-and-forget: it must return promptly and must never report
/// a delivery failure to the caller.
pub trait LogSink: Send + Sync + 'static {
    fn emit(&self, entry: LogEntry);
}

/// A sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn emit(&self, _entry: LogEntry) {}
}
