//! Domain error types

use std::path::PathBuf;

use thiserror::Error;

use super::naming::MAX_LOG_NAME_LEN;

/// Errors that can occur in the WT-Log storage core
#[derive(Error, Debug)]
pub enum WtLogError {
    #[error("Log name is required")]
    EmptyName,

    #[error("Log name must be at most {} characters", MAX_LOG_NAME_LEN)]
    NameTooLong,

    #[error("Log name must contain letters or digits")]
    InvalidName,

    #[error("A log named '{0}' already exists")]
    DuplicateName(String),

    #[error("File does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Path is not inside the logs directory: {}", .0.display())]
    OutsideLogsDir(PathBuf),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("ADIF error: {0}")]
    Adif(String),
}

impl WtLogError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Message safe to show in the UI: validation errors keep their wording,
    /// anything carrying a path or an OS cause collapses to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::EmptyName | Self::NameTooLong | Self::InvalidName => self.to_string(),
            Self::DuplicateName(_) => "A log with that name already exists".to_string(),
            Self::NotFound(_) => "The log file does not exist".to_string(),
            Self::OutsideLogsDir(_) | Self::Io { .. } | Self::Json { .. } | Self::Adif(_) => {
                fallback.to_string()
            }
        }
    }
}

/// Result type alias for WT-Log operations
pub type WtLogResult<T> = Result<T, WtLogError>;
