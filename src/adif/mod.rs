//! ADIF (Amateur Data Interchange Format) import and export
//! Reference: https://adif.org/
//!
//! Maps between ADIF records and `QsoEntry`. WT-Log keeps dates as
//! `YYYY-MM-DD` and times as `HH:MM`; ADIF uses `YYYYMMDD` and `HHMM[SS]`.

pub mod parser;
pub mod writer;

pub use parser::{parse_adif, AdifFile, AdifRecord};
pub use writer::write_adif;

use crate::domain::{QsoEntry, Settings};

/// Fields describing our own station, repeated on every exported record.
pub fn station_fields(settings: &Settings) -> Vec<(&'static str, String)> {
    vec![
        ("STATION_CALLSIGN", settings.callsign.clone()),
        ("OPERATOR", settings.callsign.clone()),
    ]
}

/// ADIF fields for one QSO, in export order.
pub fn qso_to_fields(qso: &QsoEntry) -> Vec<(&'static str, String)> {
    vec![
        ("CALL", qso.call_sign.trim().to_uppercase()),
        ("QSO_DATE", qso.date.replace('-', "")),
        ("TIME_ON", qso.time.replace(':', "")),
        ("BAND", qso.band.to_lowercase()),
        ("MODE", qso.mode.to_uppercase()),
        ("FREQ", qso.frequency.clone()),
        ("RST_SENT", qso.rst_sent.clone()),
        ("RST_RCVD", qso.rst_received.clone()),
        ("NAME", qso.name.clone()),
        ("QTH", qso.qth.clone()),
        ("GRIDSQUARE", qso.grid_square.clone()),
        ("CQZ", qso.cq_zone.clone()),
        ("ITUZ", qso.itu_zone.clone()),
        ("COUNTRY", qso.country.clone()),
        ("TX_PWR", qso.power.clone()),
        ("COMMENT", qso.notes.clone()),
    ]
}

/// Build a QSO from an ADIF record. The caller assigns `id`.
pub fn record_to_qso(record: &AdifRecord) -> QsoEntry {
    QsoEntry {
        id: None,
        date: adif_date_to_iso(&record.get_or_empty("QSO_DATE")),
        time: adif_time_to_hhmm(&record.get_or_empty("TIME_ON")),
        call_sign: record.get_or_empty("CALL").to_uppercase(),
        name: record.get_or_empty("NAME"),
        rst_sent: record.get_or_empty("RST_SENT"),
        rst_received: record.get_or_empty("RST_RCVD"),
        band: record.get_or_empty("BAND").to_lowercase(),
        mode: record.get_or_empty("MODE").to_uppercase(),
        frequency: record.get_or_empty("FREQ"),
        grid_square: record.get_or_empty("GRIDSQUARE"),
        cq_zone: record.get_or_empty("CQZ"),
        itu_zone: record.get_or_empty("ITUZ"),
        qth: record.get_or_empty("QTH"),
        country: record.get_or_empty("COUNTRY"),
        power: record.get_or_empty("TX_PWR"),
        notes: record.get_or_empty("COMMENT"),
        extra: Default::default(),
    }
}

/// "20250628" → "2025-06-28"; anything else passes through.
fn adif_date_to_iso(date: &str) -> String {
    if date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}-{}", &date[..4], &date[4..6], &date[6..])
    } else {
        date.to_string()
    }
}

/// "1805" or "180530" → "18:05"; anything else passes through.
fn adif_time_to_hhmm(time: &str) -> String {
    if (time.len() == 4 || time.len() == 6) && time.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}:{}", &time[..2], &time[2..4])
    } else {
        time.to_string()
    }
}
