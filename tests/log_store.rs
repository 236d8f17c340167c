//! Integration tests: log store lifecycle
//!
//! These tests drive `JsonLogRepository` and the command handlers through
//! `AppState` against a throwaway data directory, without a Tauri runtime.
//!
//! Run with: cargo test --test log_store

use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

use wtlog_lib::domain::{
    derive_file_stem, QsoEntry, Settings, StoragePaths, Theme, WtLogError,
};
use wtlog_lib::ports::LogRepository;
use wtlog_lib::state::AppState;
use wtlog_lib::{commands, init_logging};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fresh_state() -> (TempDir, AppState) {
    init_logging();
    let dir = TempDir::new().unwrap();
    let state = AppState::new(&StoragePaths::new(dir.path()));
    (dir, state)
}

fn station() -> Settings {
    Settings {
        callsign: "LU1ABC".into(),
        operator_name: "Ana".into(),
        grid_square: "GF05".into(),
        theme: Theme::Dark,
        ..Settings::default()
    }
}

/// `.json` file names in `dir`; a directory that was never created has none.
fn json_files(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|n| n.ends_with(".json"))
        .collect();
    names.sort();
    names
}

/// Write a log file by hand with a chosen `createdAt`.
fn write_raw_log(dir: &Path, file_name: &str, name: &str, created_at: &str) {
    std::fs::create_dir_all(dir).unwrap();
    let body = json!({
        "id": "1",
        "name": name,
        "createdAt": created_at,
        "settings": {},
        "qsos": []
    });
    std::fs::write(dir.join(file_name), serde_json::to_vec_pretty(&body).unwrap()).unwrap();
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// A brand-new data directory lists as empty and gets its logs dir created.
#[test]
fn get_logs_on_fresh_directory_is_empty() {
    let (dir, state) = fresh_state();
    assert!(commands::logs::get_logs(&state).is_empty());
    assert!(dir.path().join("logs").is_dir());
}

/// Created T1 < T2 < T3 comes back as [T3, T2, T1].
#[test]
fn get_logs_sorts_newest_first() {
    let (dir, state) = fresh_state();
    let logs = dir.path().join("logs");
    write_raw_log(&logs, "b.json", "middle", "2025-02-01T00:00:00.000Z");
    write_raw_log(&logs, "a.json", "oldest", "2025-01-01T00:00:00.000Z");
    write_raw_log(&logs, "c.json", "newest", "2025-03-01T00:00:00.000Z");

    let names: Vec<_> = state.logs.list().unwrap().into_iter().map(|l| l.log.name).collect();
    assert_eq!(names, vec!["newest", "middle", "oldest"]);
}

/// A log without a usable createdAt sorts as the epoch (last).
#[test]
fn get_logs_treats_bad_created_at_as_epoch() {
    let (dir, state) = fresh_state();
    let logs = dir.path().join("logs");
    write_raw_log(&logs, "dated.json", "dated", "2024-05-05T10:00:00.000Z");
    write_raw_log(&logs, "undated.json", "undated", "not a date");

    let listed = state.logs.list().unwrap();
    assert_eq!(listed[0].log.name, "dated");
    assert_eq!(listed[1].log.name, "undated");
    assert_eq!(listed[1].log.created_at.timestamp(), 0);
}

/// A corrupted file is left out but does not hide the valid ones.
#[test]
fn corrupt_log_is_skipped_not_fatal() {
    let (dir, state) = fresh_state();
    state.logs.create("Good One", station()).unwrap();
    std::fs::write(dir.path().join("logs").join("Broken.json"), "{ \"name\": ").unwrap();
    state.logs.create("Good Two", station()).unwrap();

    let mut names: Vec<_> = commands::logs::get_logs(&state)
        .into_iter()
        .map(|l| l.file_name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Good One.json", "Good Two.json"]);
}

/// A QSO or settings snapshot carrying both `gridSquare` and `locator`
/// still lists, and the explicit `gridSquare` wins.
#[test]
fn log_with_both_grid_keys_is_listed() {
    let (dir, state) = fresh_state();
    let logs = dir.path().join("logs");
    std::fs::create_dir_all(&logs).unwrap();
    let body = json!({
        "id": "1",
        "name": "Legacy",
        "createdAt": "2025-01-01T00:00:00.000Z",
        "settings": { "gridSquare": "GF05", "locator": "GF05" },
        "qsos": [
            { "callSign": "PY2XYZ", "gridSquare": "GG66", "locator": "GG67" },
            { "callSign": "K1ABC", "locator": "FN42" }
        ]
    });
    std::fs::write(logs.join("Legacy.json"), serde_json::to_vec(&body).unwrap()).unwrap();

    let listed = commands::logs::get_logs(&state);
    assert_eq!(listed.len(), 1);
    let log = &listed[0].log;
    assert_eq!(log.settings.grid_square, "GF05");
    assert_eq!(log.qsos[0].grid_square, "GG66");
    assert_eq!(log.qsos[0].extra.get("locator"), Some(&json!("GG67")));
    assert_eq!(log.qsos[1].grid_square, "FN42");
}

/// Listed logs carry their file name and absolute path.
#[test]
fn listed_logs_carry_location() {
    let (dir, state) = fresh_state();
    state.logs.create("Portable", station()).unwrap();

    let listed = state.logs.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].file_name, "Portable.json");
    assert_eq!(listed[0].file_path, dir.path().join("logs").join("Portable.json"));
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// create then list yields exactly one record with the given name and the
/// sanitized file name.
#[test]
fn create_then_list_yields_one_sanitized_record() {
    for name in ["Field Day 2025", "CQ WW / DX!", "  Sprint   #3 ", "LU_contest"] {
        let (_dir, state) = fresh_state();
        let created = commands::logs::create_log(&state, name, station()).unwrap();

        let listed = commands::logs::get_logs(&state);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].log.name, name.trim());
        assert_eq!(listed[0].file_name, format!("{}.json", derive_file_stem(name)));
        assert_eq!(listed[0].file_name, created.file_name);
    }
}

/// Names that collapse to the same case-insensitive file name collide, and
/// the second attempt writes nothing.
#[test]
fn duplicate_names_are_rejected_case_insensitively() {
    let (dir, state) = fresh_state();
    state.logs.create("Field Day", station()).unwrap();

    for clash in ["field day", "FIELD  DAY", " Field Day ", "Field Day!"] {
        let err = state.logs.create(clash, station()).unwrap_err();
        assert!(matches!(err, WtLogError::DuplicateName(_)), "{clash}: {err}");
    }
    assert_eq!(json_files(&dir.path().join("logs")), vec!["Field Day.json"]);
}

/// Empty and whitespace-only names fail before anything is written.
#[test]
fn empty_names_are_rejected() {
    let (dir, state) = fresh_state();
    assert!(matches!(state.logs.create("", station()), Err(WtLogError::EmptyName)));
    assert!(matches!(state.logs.create("   ", station()), Err(WtLogError::EmptyName)));
    assert!(json_files(&dir.path().join("logs")).is_empty());
}

/// Names over 25 characters are rejected before anything is written.
#[test]
fn overlong_names_are_rejected() {
    let (dir, state) = fresh_state();
    let err = state.logs.create(&"x".repeat(26), station()).unwrap_err();
    assert!(matches!(err, WtLogError::NameTooLong));
    assert!(json_files(&dir.path().join("logs")).is_empty());
}

/// Round trip: create then load gives empty QSOs, the settings snapshot and
/// a valid ISO-8601 createdAt.
#[test]
fn create_then_load_round_trips() {
    let (_dir, state) = fresh_state();
    let created = commands::logs::create_log(&state, "Field Day 2025", station()).unwrap();

    let loaded = commands::logs::load_log(&state, &created.file_path).unwrap();
    assert!(loaded.log.qsos.is_empty());
    assert_eq!(loaded.log.settings, station());
    assert_eq!(loaded.file_name, "Field Day 2025.json");
    assert_eq!(loaded.log.created_at, created.log.created_at);

    let raw: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&created.file_path).unwrap()).unwrap();
    let created_at = raw["createdAt"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
    assert_eq!(raw["id"], created.log.created_at.timestamp_millis().to_string());
    // Runtime-only fields never reach the disk
    assert!(raw.get("fileName").is_none());
    assert!(raw.get("filePath").is_none());
}

/// log-exists normalizes the candidate and ignores case and extension.
#[test]
fn log_exists_matches_case_insensitively() {
    let (_dir, state) = fresh_state();
    assert!(!commands::logs::log_exists(&state, "Field Day"));

    state.logs.create("Field Day", station()).unwrap();
    assert!(commands::logs::log_exists(&state, "Field Day"));
    assert!(commands::logs::log_exists(&state, "field day.json"));
    assert!(commands::logs::log_exists(&state, "FIELD DAY.JSON"));
    assert!(!commands::logs::log_exists(&state, "Field Days"));
}

/// Two threads racing to create the same log: exactly one wins.
#[test]
fn concurrent_create_has_single_winner() {
    let (dir, state) = fresh_state();
    let state = std::sync::Arc::new(state);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let state = std::sync::Arc::clone(&state);
            std::thread::spawn(move || state.logs.create("Race Day", Settings::default()))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, WtLogError::DuplicateName(_))));
    assert_eq!(json_files(&dir.path().join("logs")), vec!["Race Day.json"]);
}

// ---------------------------------------------------------------------------
// Load / save / delete
// ---------------------------------------------------------------------------

/// Saving replaces the QSO list and strips echoed runtime fields.
#[test]
fn save_replaces_qsos() {
    let (_dir, state) = fresh_state();
    let created = state.logs.create("Club Log", station()).unwrap();

    let mut log = created.log.clone();
    log.qsos.push(QsoEntry {
        id: Some(1),
        date: "2025-06-28".into(),
        time: "18:05".into(),
        call_sign: "PY2XYZ".into(),
        band: "20m".into(),
        mode: "SSB".into(),
        ..Default::default()
    });
    log.extra.insert("fileName".into(), json!("Club Log.json"));
    commands::logs::save_log(&state, &created.file_path, log).unwrap();

    let loaded = state.logs.load(&created.file_path).unwrap();
    assert_eq!(loaded.log.qsos.len(), 1);
    assert_eq!(loaded.log.qsos[0].call_sign, "PY2XYZ");
    assert!(loaded.log.extra.is_empty());
}

/// Loading a missing file fails.
#[test]
fn load_missing_file_fails() {
    let (dir, state) = fresh_state();
    let missing = dir.path().join("logs").join("Nothing.json");
    assert!(state.logs.load(&missing).is_err());
}

/// Loading is confined to the logs directory.
#[test]
fn load_outside_logs_dir_is_rejected() {
    let (dir, state) = fresh_state();
    std::fs::write(dir.path().join("settings.json"), "{}").unwrap();
    assert!(matches!(
        state.logs.load(&dir.path().join("settings.json")),
        Err(WtLogError::OutsideLogsDir(_))
    ));
}

/// Delete removes the file and reports success.
#[test]
fn delete_removes_log() {
    let (_dir, state) = fresh_state();
    let created = state.logs.create("Temporary", station()).unwrap();

    assert_eq!(commands::logs::delete_log(&state, &created.file_path), Ok(true));
    assert!(!created.file_path.exists());
    assert!(commands::logs::get_logs(&state).is_empty());
}

/// Deleting a non-existent log is a not-found error, not a generic I/O one.
#[test]
fn delete_missing_file_is_not_found() {
    let (dir, state) = fresh_state();
    let missing = dir.path().join("logs").join("Ghost.json");
    assert!(matches!(state.logs.delete(&missing), Err(WtLogError::NotFound(_))));
}
