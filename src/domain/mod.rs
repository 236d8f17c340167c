//! Core domain types
//!
//! Pure types with no I/O dependencies. These represent the core concepts
//! of the logbook: station settings, logs and the QSOs they hold.

pub mod config;
pub mod error;
pub mod logbook;
pub mod naming;
pub mod settings;

pub use config::*;
pub use error::*;
pub use logbook::*;
pub use naming::*;
pub use settings::*;
