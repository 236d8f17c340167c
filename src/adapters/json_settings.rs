//! Settings store backed by a single JSON file

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::adapters::atomic_file;
use crate::domain::{Settings, StoragePaths, WtLogError, WtLogResult};
use crate::ports::SettingsRepository;

/// Reads and writes `<root>/settings.json`.
pub struct JsonSettingsRepository {
    path: PathBuf,
}

impl JsonSettingsRepository {
    pub fn new(paths: &StoragePaths) -> Self {
        Self {
            path: paths.settings_file(),
        }
    }

    fn write(&self, settings: &Settings) -> WtLogResult<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| WtLogError::io("Failed to create settings directory", e))?;
        }
        let json = serde_json::to_vec_pretty(settings)
            .map_err(|e| WtLogError::json("Failed to serialize settings", e))?;
        atomic_file::write_replace(&self.path, &json)
            .map_err(|e| WtLogError::io("Failed to write settings", e))
    }
}

impl SettingsRepository for JsonSettingsRepository {
    fn load(&self) -> WtLogResult<Settings> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", self.path.display());
                return Ok(Settings::default());
            }
            Err(e) => {
                log::error!("Error loading settings from {}: {e}", self.path.display());
                return Err(WtLogError::io("Failed to read settings", e));
            }
        };
        let mut settings: Settings = serde_json::from_str(&json).map_err(|e| {
            log::error!("Error parsing settings {}: {e}", self.path.display());
            WtLogError::json("Failed to parse settings", e)
        })?;
        settings.resolve_locator();
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> WtLogResult<()> {
        self.write(settings).map_err(|e| {
            log::error!("Error saving settings to {}: {e}", self.path.display());
            e
        })?;
        log::info!("Saved settings for {}", settings.callsign);
        Ok(())
    }
}
