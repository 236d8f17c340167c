//! Settings commands — load and save the station settings

use crate::domain::Settings;
use crate::state::AppState;

const LOAD_FAILED: &str = "Could not load settings";
const SAVE_FAILED: &str = "Could not save settings";

/// Stored settings, or the first-run defaults
pub fn load_settings(state: &AppState) -> Result<Settings, String> {
    state
        .settings
        .load()
        .map_err(|e| e.user_message(LOAD_FAILED))
}

pub fn save_settings(state: &AppState, settings: &Settings) -> Result<(), String> {
    state
        .settings
        .save(settings)
        .map_err(|e| e.user_message(SAVE_FAILED))
}

#[cfg(feature = "desktop")]
pub mod ipc {
    use tauri::State;

    use crate::domain::Settings;
    use crate::state::AppState;

    #[tauri::command]
    pub fn load_settings(state: State<'_, AppState>) -> Result<Settings, String> {
        super::load_settings(&state)
    }

    #[tauri::command]
    pub fn save_settings(state: State<'_, AppState>, settings: Settings) -> Result<(), String> {
        super::save_settings(&state, &settings)
    }
}
