//! Progress/diagnostic sinks handed to the transform unit by the driver

use std::sync::Mutex;

/// Error reported by a sink that could not accept a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSinkError {
    pub message: String,
}

impl std::fmt::Display for LogSinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "log sink failed: {}", self.message)
    }
}

impl std::error::Error for LogSinkError {}

/// A sink accepting human-readable messages.
///
/// Write failures are the sink's problem: the transform unit drops them and
/// carries on.
pub trait ImportLog {
    fn write(&self, level: log::Level, message: &str) -> Result<(), LogSinkError>;
}

/// Forwards messages to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeLog;

impl ImportLog for FacadeLog {
    fn write(&self, level: log::Level, message: &str) -> Result<(), LogSinkError> {
        log::log!(target: "history_import::transform", level, "{}", message);
        Ok(())
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLog;

impl ImportLog for NullLog {
    fn write(&self, _level: log::Level, _message: &str) -> Result<(), LogSinkError> {
        Ok(())
    }
}

/// Keeps messages in memory, for previews and tests
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<(log::Level, String)>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of collected entries
    pub fn entries(&self) -> Vec<(log::Level, String)> {
        self.entries
            .lock()
            .map(|e| e.to_vec())
            .unwrap_or_default()
    }

    /// Count entries at a given level
    pub fn count(&self, level: log::Level) -> usize {
        self.entries().iter().filter(|(l, _)| *l == level).count()
    }
}

impl ImportLog for MemoryLog {
    fn write(&self, level: log::Level, message: &str) -> Result<(), LogSinkError> {
        let mut entries = self.entries.lock().map_err(|_| LogSinkError {
            message: "memory log poisoned".to_string(),
        })?;
        entries.push((level, message.to_string()));
        Ok(())
    }
}

/// Write to a sink, dropping failures
pub(crate) fn emit(sink: &dyn ImportLog, level: log::Level, message: &str) {
    if let Err(e) = sink.write(level, message) {
        log::debug!("Ignoring import log failure: {}", e);
    }
}
