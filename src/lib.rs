//! WT-Log Desktop Back End
//!
//! Storage core for a ham radio logbook: station settings in one JSON file,
//! and each log (a named list of QSOs) in its own JSON file.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types, no I/O dependencies
//! - `ports/` - Trait definitions (interfaces) for the two stores
//! - `adif/` - ADIF interchange format (parse, write, QSO mapping)
//! - `adapters/` - Implementations of ports (JSON files on disk)
//! - `commands/` - Request handlers for the UI, Tauri commands under `desktop`
//! - `state/` - Application state management
//!
//! ## Storage layout
//!
//! ```text
//! <data dir>/settings.json
//! <data dir>/logs/<log name>.json
//! ```
//!
//! The data dir is the platform app data directory unless `WTLOG_DATA_DIR`
//! is set.

// Core domain (pure, no I/O)
pub mod adif;
pub mod domain;
pub mod ports;

// Adapters (external I/O)
pub mod adapters;

// Request handling
pub mod commands;
pub mod state;

/// Install the env_logger backend. `RUST_LOG` overrides the default
/// `wtlog_lib=info` filter. Safe to call more than once.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("wtlog_lib=info");
    let _ = env_logger::Builder::from_env(env).try_init();
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use tauri::Manager;

    use crate::domain::StoragePaths;
    use crate::state::AppState;

    init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let paths = StoragePaths::resolve(app.path().app_data_dir()?);
            log::info!("Data directory: {}", paths.root().display());
            app.manage(AppState::new(&paths));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Settings commands
            commands::settings::ipc::load_settings,
            commands::settings::ipc::save_settings,
            // Log commands
            commands::logs::ipc::get_logs,
            commands::logs::ipc::log_exists,
            commands::logs::ipc::load_log,
            commands::logs::ipc::create_log,
            commands::logs::ipc::save_log,
            commands::logs::ipc::delete_log,
            // ADIF commands
            commands::adif::ipc::export_adif,
            commands::adif::ipc::import_adif,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
