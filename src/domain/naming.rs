//! Log name rules
//!
//! A log's display name maps to its file name on disk: everything except
//! ASCII word characters and whitespace is dropped, whitespace runs collapse
//! to one space, and `.json` is appended. File names are unique within the
//! logs directory, compared case-insensitively.

use super::error::{WtLogError, WtLogResult};

/// Longest display name accepted for a new log
pub const MAX_LOG_NAME_LEN: usize = 25;

/// Extension of log files in the logs directory
pub const LOG_FILE_EXTENSION: &str = "json";

/// Validate a user-supplied log name, returning it trimmed.
pub fn validate_log_name(name: &str) -> WtLogResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(WtLogError::EmptyName);
    }
    if trimmed.chars().count() > MAX_LOG_NAME_LEN {
        return Err(WtLogError::NameTooLong);
    }
    if derive_file_stem(trimmed).is_empty() {
        return Err(WtLogError::InvalidName);
    }
    Ok(trimmed)
}

/// Strip a name down to the characters allowed in a log file stem.
pub fn derive_file_stem(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// File name (`<stem>.json`) a log with this display name is stored under.
pub fn log_file_name(name: &str) -> String {
    format!("{}.{LOG_FILE_EXTENSION}", derive_file_stem(name))
}

/// Normalise an existence-check candidate, which may or may not already
/// carry the `.json` extension.
pub fn candidate_file_name(candidate: &str) -> String {
    log_file_name(strip_json_extension(candidate.trim()))
}

/// Case-insensitive file name comparison used for duplicate detection.
pub fn same_file_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn strip_json_extension(name: &str) -> &str {
    let suffix_len = LOG_FILE_EXTENSION.len() + 1;
    if name.len() < suffix_len {
        return name;
    }
    let split = name.len() - suffix_len;
    match name.get(split..) {
        Some(suffix) if suffix.eq_ignore_ascii_case(".json") => &name[..split],
        _ => name,
    }
}
