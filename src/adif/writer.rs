//! ADIF writer

use chrono::{DateTime, Utc};

use super::{qso_to_fields, station_fields};
use crate::domain::LogRecord;

pub const ADIF_VERSION: &str = "3.1.4";
pub const PROGRAM_ID: &str = "WT-Log";

/// Render a log as an ADIF document, one record per QSO.
pub fn write_adif(log: &LogRecord, now: DateTime<Utc>) -> String {
    let mut out = format!("{PROGRAM_ID} ADIF export: {}\n", log.name);
    push_field(&mut out, "ADIF_VER", ADIF_VERSION);
    push_field(&mut out, "PROGRAMID", PROGRAM_ID);
    push_field(&mut out, "PROGRAMVERSION", env!("CARGO_PKG_VERSION"));
    push_field(
        &mut out,
        "CREATED_TIMESTAMP",
        &now.format("%Y%m%d %H%M%S").to_string(),
    );
    out.push_str("\n<EOH>\n\n");

    let station = station_fields(&log.settings);
    for qso in &log.qsos {
        for (name, value) in station.iter().chain(qso_to_fields(qso).iter()) {
            push_field(&mut out, name, value);
        }
        out.push_str("<EOR>\n");
    }
    out
}

/// Append `<NAME:LEN>value ` unless the value is empty.
fn push_field(out: &mut String, name: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    out.push_str(&format!("<{name}:{}>{value} ", value.len()));
}
