//! Logs and QSO entries
//!
//! A log is one JSON document on disk: a name, a creation instant, the
//! station settings at creation time, and the QSOs in entry order.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::settings::{take_locator, Settings};

/// Keys only ever attached to a log in responses, never written to disk.
const RUNTIME_KEYS: [&str; 2] = ["fileName", "filePath"];

/// A single logged contact
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QsoEntry {
    /// Client-side row identifier (assigned by the UI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// UTC date, "YYYY-MM-DD"
    #[serde(default)]
    pub date: String,
    /// UTC time, "HH:MM"
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub call_sign: String,
    /// Operator name of the worked station
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rst_sent: String,
    #[serde(default)]
    pub rst_received: String,
    /// Band label (e.g., "20m")
    #[serde(default)]
    pub band: String,
    #[serde(default)]
    pub mode: String,
    /// Frequency in MHz as typed
    #[serde(default)]
    pub frequency: String,
    /// Also read from a legacy `locator` key (see `resolve_locator`)
    #[serde(default)]
    pub grid_square: String,
    #[serde(default)]
    pub cq_zone: String,
    #[serde(default)]
    pub itu_zone: String,
    #[serde(default)]
    pub qth: String,
    #[serde(default)]
    pub country: String,
    /// TX power in watts
    #[serde(default)]
    pub power: String,
    #[serde(default)]
    pub notes: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QsoEntry {
    /// Fill `grid_square` from a `locator` key when only the latter is set.
    pub fn resolve_locator(&mut self) {
        take_locator(&mut self.grid_square, &mut self.extra);
    }
}

/// A log as persisted on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    /// Creation instant in epoch milliseconds, as a string
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    /// Display name chosen by the operator
    #[serde(default)]
    pub name: String,
    /// Absent or unparsable values read back as the Unix epoch
    #[serde(default, with = "iso_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub qsos: Vec<QsoEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LogRecord {
    /// Fresh, empty log created at `now`.
    ///
    /// `now` is cut to whole milliseconds, the precision `createdAt` is
    /// stored with, so the returned record matches what a later load reads.
    pub fn new(name: &str, settings: Settings, now: DateTime<Utc>) -> Self {
        let now = now.trunc_subsecs(3);
        Self {
            id: now.timestamp_millis().to_string(),
            name: name.to_string(),
            created_at: now,
            settings,
            qsos: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Apply `resolve_locator` to the settings snapshot and every QSO.
    pub fn resolve_locators(&mut self) {
        self.settings.resolve_locator();
        for qso in &mut self.qsos {
            qso.resolve_locator();
        }
    }

    /// Drop response-only keys a caller may have echoed back.
    pub fn strip_runtime_fields(&mut self) {
        for key in RUNTIME_KEYS {
            self.extra.remove(key);
        }
    }

    /// Next free client identifier for an appended QSO.
    pub fn next_qso_id(&self) -> i64 {
        self.qsos
            .iter()
            .filter_map(|q| q.id)
            .max()
            .map_or(1, |max| max + 1)
    }
}

/// A log together with where it lives on disk
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLog {
    #[serde(flatten)]
    pub log: LogRecord,
    pub file_name: String,
    pub file_path: PathBuf,
}

/// Parse a stored `createdAt` value, falling back to the Unix epoch.
///
/// Accepts RFC 3339 strings, offset-less ISO date-times (taken as UTC) and
/// epoch milliseconds.
pub fn normalize_timestamp(value: &Value) -> DateTime<Utc> {
    match value {
        Value::String(s) => parse_timestamp(s).unwrap_or_default(),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or_default(),
        _ => DateTime::default(),
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// ISO-8601 with millisecond precision and a `Z` suffix, matching what the
/// front end produces with `Date.toISOString()`.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

mod iso_timestamp {
    use super::*;

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format_timestamp(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let value = Value::deserialize(d)?;
        Ok(normalize_timestamp(&value))
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
