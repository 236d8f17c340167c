//! Log store port trait

use std::path::Path;

use crate::domain::{LogRecord, Settings, StoredLog, WtLogResult};

/// Trait for the collection of log files
pub trait LogRepository: Send + Sync {
    /// All readable logs, newest first. Unreadable entries are skipped.
    fn list(&self) -> WtLogResult<Vec<StoredLog>>;

    /// Whether a log with this name (with or without `.json`) already exists
    fn exists(&self, candidate: &str) -> WtLogResult<bool>;

    /// Create a new, empty log. Fails on an invalid or duplicate name.
    fn create(&self, name: &str, settings: Settings) -> WtLogResult<StoredLog>;

    /// Read one log by absolute path
    fn load(&self, path: &Path) -> WtLogResult<StoredLog>;

    /// Replace the contents of an existing log
    fn save(&self, path: &Path, log: LogRecord) -> WtLogResult<StoredLog>;

    /// Remove a log file
    fn delete(&self, path: &Path) -> WtLogResult<bool>;
}
