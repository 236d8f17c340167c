//! ADIF parser
//!
//! Reads `<NAME:LEN[:TYPE]>value` fields. Lengths count bytes, tag names are
//! case-insensitive. An optional header runs up to `<EOH>`, and every record
//! ends with `<EOR>`.

use std::collections::HashMap;

use crate::domain::{WtLogError, WtLogResult};

/// A single ADIF record (one QSO)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdifRecord {
    /// All fields as key-value pairs (uppercase keys)
    pub fields: HashMap<String, String>,
}

impl AdifRecord {
    /// Get a field value (case-insensitive lookup)
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(&key.to_uppercase()).map(String::as_str)
    }

    pub fn get_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }
}

/// Parsed ADIF document
#[derive(Debug, Clone, Default)]
pub struct AdifFile {
    /// Header fields (before `<EOH>`)
    pub header: HashMap<String, String>,
    /// QSO records
    pub records: Vec<AdifRecord>,
}

/// Parse an ADIF document. Records without a `CALL` field are dropped.
///
/// Tags are scanned in order over raw bytes, so a declared length always
/// wins over anything that looks like a tag inside a value. Values that are
/// not valid UTF-8 are read as Latin-1. A field with an unreadable length is
/// kept empty with a warning; only a length running past the end of the
/// input fails the parse.
pub fn parse_adif(content: impl AsRef<[u8]>) -> WtLogResult<AdifFile> {
    let bytes = content.as_ref();
    let mut file = AdifFile::default();
    let mut fields = HashMap::new();
    let mut pos = 0;

    while let Some(open) = find_byte(bytes, pos, b'<') {
        let spec_start = open + 1;
        let Some(spec_end) = find_byte(bytes, spec_start, b'>') else {
            break;
        };
        let spec = decode(&bytes[spec_start..spec_end]);
        pos = spec_end + 1;

        let mut parts = spec.split(':');
        let name = parts.next().unwrap_or_default().trim().to_ascii_uppercase();
        match name.as_str() {
            "" => continue,
            "EOH" => {
                file.header = std::mem::take(&mut fields);
                continue;
            }
            "EOR" => {
                let record = AdifRecord {
                    fields: std::mem::take(&mut fields),
                };
                if record.get("CALL").is_some_and(|call| !call.is_empty()) {
                    file.records.push(record);
                }
                continue;
            }
            _ => {}
        }

        let length = match parts.next().map(str::trim) {
            Some(len) => len.parse::<usize>().unwrap_or_else(|_| {
                log::warn!("Ignoring field {name} with invalid length '{len}'");
                0
            }),
            None => 0,
        };
        let value = pos
            .checked_add(length)
            .and_then(|end| bytes.get(pos..end))
            .ok_or_else(|| {
                WtLogError::Adif(format!("Field {name} is truncated (declared {length} bytes)"))
            })?;
        fields.insert(name, decode(value).trim().to_string());
        pos += length;
    }

    if !fields.is_empty() {
        log::warn!("Dropping {} trailing ADIF fields without <EOR>", fields.len());
    }
    Ok(file)
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|offset| from + offset)
}

/// UTF-8 if valid, otherwise Latin-1 (every byte maps to the same code point).
fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
