//! Log store backed by one JSON file per log
//!
//! Files live directly in the logs directory and are named after the log
//! (see `domain::naming`). Listing is tolerant: a file that cannot be read
//! or parsed is skipped with a warning instead of failing the whole call.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::adapters::atomic_file;
use crate::domain::{
    candidate_file_name, log_file_name, same_file_name, validate_log_name, LogRecord, Settings,
    StoragePaths, StoredLog, WtLogError, WtLogResult, LOG_FILE_EXTENSION,
};
use crate::ports::LogRepository;

/// Manages the `<root>/logs` directory.
pub struct JsonLogRepository {
    dir: PathBuf,
}

impl JsonLogRepository {
    pub fn new(paths: &StoragePaths) -> Self {
        Self {
            dir: paths.logs_dir(),
        }
    }

    /// Get (and create if needed) the logs directory.
    fn ensure_dir(&self) -> WtLogResult<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| WtLogError::io("Failed to create logs directory", e))
    }

    /// Paths of all `.json` files in the logs directory, in enumeration order.
    fn log_files(&self) -> WtLogResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.dir)
            .map_err(|e| WtLogError::io("Failed to read logs directory", e))?;

        Ok(entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {}: {e}", self.dir.display());
                    None
                }
            })
            .filter(|path| has_log_extension(path) && path.is_file())
            .collect())
    }

    fn taken_name(&self, file_name: &str) -> WtLogResult<Option<String>> {
        Ok(self
            .log_files()?
            .iter()
            .filter_map(|path| path.file_name()?.to_str().map(String::from))
            .find(|existing| same_file_name(existing, file_name)))
    }

    /// File name of `path` if it names a log file directly inside the logs
    /// directory.
    fn file_name_in_dir(&self, path: &Path) -> WtLogResult<String> {
        let outside = || WtLogError::OutsideLogsDir(path.to_path_buf());
        if path.parent() != Some(self.dir.as_path()) || !has_log_extension(path) {
            return Err(outside());
        }
        path.file_name()
            .and_then(|name| name.to_str())
            .map(String::from)
            .ok_or_else(outside)
    }

    fn write_log(&self, path: &Path, log: &LogRecord, create: bool) -> WtLogResult<()> {
        let json = serde_json::to_vec_pretty(log)
            .map_err(|e| WtLogError::json("Failed to serialize log", e))?;
        let written = if create {
            atomic_file::write_new(path, &json)
        } else {
            atomic_file::write_replace(path, &json)
        };
        written.map_err(|e| WtLogError::io(format!("Failed to write log {}", path.display()), e))
    }
}

impl LogRepository for JsonLogRepository {
    fn list(&self) -> WtLogResult<Vec<StoredLog>> {
        self.ensure_dir()?;

        let mut logs: Vec<StoredLog> = self
            .log_files()?
            .into_iter()
            .filter_map(|path| match read_log(&path) {
                Ok(log) => Some(log),
                Err(e) => {
                    log::warn!("Skipping log {}: {e}", path.display());
                    None
                }
            })
            .collect();

        // Newest first; sort_by is stable so ties keep directory order
        logs.sort_by(|a, b| b.log.created_at.cmp(&a.log.created_at));
        Ok(logs)
    }

    fn exists(&self, candidate: &str) -> WtLogResult<bool> {
        self.ensure_dir()?;
        Ok(self.taken_name(&candidate_file_name(candidate))?.is_some())
    }

    fn create(&self, name: &str, settings: Settings) -> WtLogResult<StoredLog> {
        let name = validate_log_name(name)?;
        self.ensure_dir()?;

        let file_name = log_file_name(name);
        if let Some(existing) = self.taken_name(&file_name)? {
            log::warn!("Refusing to create '{name}': {existing} already exists");
            return Err(WtLogError::DuplicateName(file_name));
        }

        let mut log = LogRecord::new(name, settings, Utc::now());
        log.resolve_locators();
        let path = self.dir.join(&file_name);
        match self.write_log(&path, &log, true) {
            Ok(()) => {}
            Err(WtLogError::Io { source, .. }) if source.kind() == ErrorKind::AlreadyExists => {
                log::warn!("Lost creation race for {file_name}");
                return Err(WtLogError::DuplicateName(file_name));
            }
            Err(e) => {
                log::error!("Error creating log '{name}': {e}");
                return Err(e);
            }
        }

        log::info!("Created log '{name}' at {}", path.display());
        Ok(StoredLog {
            log,
            file_name,
            file_path: path,
        })
    }

    fn load(&self, path: &Path) -> WtLogResult<StoredLog> {
        self.file_name_in_dir(path)
            .and_then(|_| read_log(path))
            .map_err(|e| {
                log::error!("Error loading log {}: {e}", path.display());
                e
            })
    }

    fn save(&self, path: &Path, mut log: LogRecord) -> WtLogResult<StoredLog> {
        let file_name = self.file_name_in_dir(path)?;
        if !path.is_file() {
            return Err(WtLogError::NotFound(path.to_path_buf()));
        }

        log.strip_runtime_fields();
        log.resolve_locators();
        self.write_log(path, &log, false).map_err(|e| {
            log::error!("Error saving log {file_name}: {e}");
            e
        })?;

        log::info!("Saved log {file_name} ({} QSOs)", log.qsos.len());
        Ok(StoredLog {
            log,
            file_name,
            file_path: path.to_path_buf(),
        })
    }

    fn delete(&self, path: &Path) -> WtLogResult<bool> {
        let file_name = self.file_name_in_dir(path)?;
        if !path.exists() {
            log::warn!("Cannot delete {}: file does not exist", path.display());
            return Err(WtLogError::NotFound(path.to_path_buf()));
        }

        std::fs::remove_file(path).map_err(|e| {
            log::error!("Error deleting log {}: {e}", path.display());
            if e.kind() == ErrorKind::NotFound {
                WtLogError::NotFound(path.to_path_buf())
            } else {
                WtLogError::io(format!("Failed to delete log {file_name}"), e)
            }
        })?;

        log::info!("Deleted log {file_name}");
        Ok(true)
    }
}

fn has_log_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(LOG_FILE_EXTENSION))
}

fn read_log(path: &Path) -> WtLogResult<StoredLog> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| WtLogError::io(format!("Failed to read log {}", path.display()), e))?;
    let mut log: LogRecord = serde_json::from_str(&json)
        .map_err(|e| WtLogError::json(format!("Failed to parse log {}", path.display()), e))?;
    log.resolve_locators();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(StoredLog {
        log,
        file_name,
        file_path: path.to_path_buf(),
    })
}
