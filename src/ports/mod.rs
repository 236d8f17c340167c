//! Port traits (interfaces)
//!
//! These traits define the boundaries between the core domain and storage.
//! Adapters implement them on top of the filesystem.

pub mod logs;
pub mod settings;

pub use logs::*;
pub use settings::*;
