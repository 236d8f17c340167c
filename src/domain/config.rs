//! Storage layout
//!
//! Everything the stores touch lives under one root directory:
//!
//! ```text
//! <root>/settings.json
//! <root>/logs/<name>.json
//! ```
//!
//! The root is passed in explicitly so tests can point it at a temp dir.

use std::path::{Path, PathBuf};

/// Environment variable overriding the host's data directory
pub const DATA_DIR_ENV: &str = "WTLOG_DATA_DIR";

const SETTINGS_FILE: &str = "settings.json";
const LOGS_DIR: &str = "logs";

/// Resolved on-disk locations for settings and logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    root: PathBuf,
}

impl StoragePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Use `WTLOG_DATA_DIR` when set and non-empty, else `default_root`.
    pub fn resolve(default_root: impl Into<PathBuf>) -> Self {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::new(dir),
            _ => Self::new(default_root),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.root.join(LOGS_DIR)
    }
}
