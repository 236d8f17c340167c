//! Station settings
//!
//! One settings record per installation, describing the station and its
//! operator. A snapshot of it is also embedded in every log at creation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// UI theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Station/operator configuration
///
/// Missing string fields read back as `""`. Fields this version does not
/// know about are kept in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Station callsign (e.g., "LU1ABC")
    #[serde(default)]
    pub callsign: String,
    #[serde(default)]
    pub operator_name: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub qth: String,
    #[serde(default)]
    pub country: String,
    /// Maidenhead locator (e.g., "GF05"), also read from `locator`
    #[serde(default)]
    pub grid_square: String,
    #[serde(default)]
    pub cq_zone: String,
    #[serde(default)]
    pub itu_zone: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Settings {
    /// Fill `grid_square` from a `locator` key when only the latter is set.
    pub fn resolve_locator(&mut self) {
        take_locator(&mut self.grid_square, &mut self.extra);
    }
}

/// Older documents name the grid field `locator`. It stays in `extra` when
/// `gridSquare` is already present, so neither key is lost.
pub fn take_locator(grid_square: &mut String, extra: &mut Map<String, Value>) {
    if !grid_square.is_empty() {
        return;
    }
    if let Some(Value::String(locator)) = extra.remove("locator") {
        *grid_square = locator;
    }
}

impl Default for Settings {
    /// First-run record: empty station fields, Argentine locale zones.
    fn default() -> Self {
        Self {
            callsign: String::new(),
            operator_name: String::new(),
            name: String::new(),
            city: String::new(),
            qth: String::new(),
            country: "Argentina".to_string(),
            grid_square: String::new(),
            cq_zone: "13".to_string(),
            itu_zone: "14".to_string(),
            theme: Theme::Light,
            extra: Map::new(),
        }
    }
}
