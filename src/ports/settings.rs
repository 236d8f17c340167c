//! Settings store port trait

use crate::domain::{Settings, WtLogResult};

/// Trait for the single persisted settings record
pub trait SettingsRepository: Send + Sync {
    /// Stored settings, or the defaults on first run
    fn load(&self) -> WtLogResult<Settings>;

    /// Overwrite the stored settings
    fn save(&self, settings: &Settings) -> WtLogResult<()>;
}
