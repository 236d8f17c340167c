//! Log commands — list, check, create, load, save and delete log files
//!
//! Listing and existence checks never fail from the UI's point of view: an
//! I/O error is logged and an empty/negative answer returned. The other
//! commands map store errors to short user-facing messages.

use std::path::Path;

use crate::domain::{LogRecord, Settings, StoredLog};
use crate::state::AppState;

const LOAD_FAILED: &str = "Could not load the log";
const CREATE_FAILED: &str = "Could not create the log";
const SAVE_FAILED: &str = "Could not save the log";
const DELETE_FAILED: &str = "Could not delete the log";

/// All logs, newest first
pub fn get_logs(state: &AppState) -> Vec<StoredLog> {
    state.logs.list().unwrap_or_else(|e| {
        log::error!("Error listing logs: {e}");
        Vec::new()
    })
}

pub fn log_exists(state: &AppState, name: &str) -> bool {
    state.logs.exists(name).unwrap_or_else(|e| {
        log::error!("Error checking whether log '{name}' exists: {e}");
        false
    })
}

pub fn load_log(state: &AppState, file_path: &Path) -> Result<StoredLog, String> {
    state
        .logs
        .load(file_path)
        .map_err(|_| LOAD_FAILED.to_string())
}

pub fn create_log(state: &AppState, name: &str, settings: Settings) -> Result<StoredLog, String> {
    state
        .logs
        .create(name, settings)
        .map_err(|e| e.user_message(CREATE_FAILED))
}

/// Rewrite an existing log (last writer wins)
pub fn save_log(state: &AppState, file_path: &Path, log: LogRecord) -> Result<StoredLog, String> {
    state
        .logs
        .save(file_path, log)
        .map_err(|e| e.user_message(SAVE_FAILED))
}

pub fn delete_log(state: &AppState, file_path: &Path) -> Result<bool, String> {
    state
        .logs
        .delete(file_path)
        .map_err(|e| e.user_message(DELETE_FAILED))
}

#[cfg(feature = "desktop")]
pub mod ipc {
    use std::path::PathBuf;

    use tauri::State;

    use crate::domain::{LogRecord, Settings, StoredLog};
    use crate::state::AppState;

    #[tauri::command]
    pub fn get_logs(state: State<'_, AppState>) -> Vec<StoredLog> {
        super::get_logs(&state)
    }

    #[tauri::command]
    pub fn log_exists(state: State<'_, AppState>, name: String) -> bool {
        super::log_exists(&state, &name)
    }

    #[tauri::command]
    pub fn load_log(state: State<'_, AppState>, file_path: PathBuf) -> Result<StoredLog, String> {
        super::load_log(&state, &file_path)
    }

    #[tauri::command]
    pub fn create_log(
        state: State<'_, AppState>,
        name: String,
        settings: Settings,
    ) -> Result<StoredLog, String> {
        super::create_log(&state, &name, settings)
    }

    #[tauri::command]
    pub fn save_log(
        state: State<'_, AppState>,
        file_path: PathBuf,
        log: LogRecord,
    ) -> Result<StoredLog, String> {
        super::save_log(&state, &file_path, log)
    }

    #[tauri::command]
    pub fn delete_log(state: State<'_, AppState>, file_path: PathBuf) -> Result<bool, String> {
        super::delete_log(&state, &file_path)
    }
}
