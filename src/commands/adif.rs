//! ADIF commands: export a log to an ADIF file, import QSOs from one

use std::path::Path;

use chrono::Utc;

use crate::adapters::atomic_file;
use crate::adif::{parse_adif, record_to_qso, write_adif};
use crate::domain::{StoredLog, WtLogError, WtLogResult};
use crate::state::AppState;

const EXPORT_FAILED: &str = "Could not export ADIF";
const IMPORT_FAILED: &str = "Could not import ADIF";

/// Write the log's QSOs to `dest`, returning how many records were written.
pub fn export_adif(state: &AppState, log_path: &Path, dest: &Path) -> Result<usize, String> {
    export(state, log_path, dest).map_err(|e| {
        log::error!("ADIF export to {} failed: {e}", dest.display());
        e.user_message(EXPORT_FAILED)
    })
}

/// Append every QSO found in `source` to the log and save it.
pub fn import_adif(state: &AppState, log_path: &Path, source: &Path) -> Result<StoredLog, String> {
    import(state, log_path, source).map_err(|e| {
        log::error!("ADIF import from {} failed: {e}", source.display());
        e.user_message(IMPORT_FAILED)
    })
}

fn export(state: &AppState, log_path: &Path, dest: &Path) -> WtLogResult<usize> {
    let stored = state.logs.load(log_path)?;
    let text = write_adif(&stored.log, Utc::now());
    atomic_file::write_replace(dest, text.as_bytes())
        .map_err(|e| WtLogError::io("Failed to write ADIF file", e))?;

    let count = stored.log.qsos.len();
    log::info!("Exported {count} QSOs from {} to {}", stored.file_name, dest.display());
    Ok(count)
}

fn import(state: &AppState, log_path: &Path, source: &Path) -> WtLogResult<StoredLog> {
    let bytes =
        std::fs::read(source).map_err(|e| WtLogError::io("Failed to read ADIF file", e))?;
    let adif = parse_adif(&bytes)?;
    if let Some(program) = adif.header.get("PROGRAMID") {
        log::debug!("ADIF file {} written by {program}", source.display());
    }

    let mut stored = state.logs.load(log_path)?;
    let mut next_id = stored.log.next_qso_id();
    for record in &adif.records {
        let mut qso = record_to_qso(record);
        qso.id = Some(next_id);
        next_id += 1;
        stored.log.qsos.push(qso);
    }

    log::info!("Importing {} QSOs into {}", adif.records.len(), stored.file_name);
    state.logs.save(log_path, stored.log)
}

#[cfg(feature = "desktop")]
pub mod ipc {
    use std::path::PathBuf;

    use tauri::State;

    use crate::domain::StoredLog;
    use crate::state::AppState;

    #[tauri::command]
    pub fn export_adif(
        state: State<'_, AppState>,
        log_path: PathBuf,
        dest_path: PathBuf,
    ) -> Result<usize, String> {
        super::export_adif(&state, &log_path, &dest_path)
    }

    #[tauri::command]
    pub fn import_adif(
        state: State<'_, AppState>,
        log_path: PathBuf,
        source_path: PathBuf,
    ) -> Result<StoredLog, String> {
        super::import_adif(&state, &log_path, &source_path)
    }
}
