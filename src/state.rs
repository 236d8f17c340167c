//! Application state

use crate::adapters::json_logs::JsonLogRepository;
use crate::adapters::json_settings::JsonSettingsRepository;
use crate::domain::StoragePaths;
use crate::ports::{LogRepository, SettingsRepository};

/// Shared application state managed by Tauri
///
/// The repositories hold no mutable state of their own, so no locking is
/// needed here; each command runs its file operations to completion.
pub struct AppState {
    pub logs: Box<dyn LogRepository>,
    pub settings: Box<dyn SettingsRepository>,
}

impl AppState {
    /// JSON-file repositories rooted at `paths`
    pub fn new(paths: &StoragePaths) -> Self {
        Self::with_repositories(
            Box::new(JsonLogRepository::new(paths)),
            Box::new(JsonSettingsRepository::new(paths)),
        )
    }

    pub fn with_repositories(
        logs: Box<dyn LogRepository>,
        settings: Box<dyn SettingsRepository>,
    ) -> Self {
        Self { logs, settings }
    }
}
