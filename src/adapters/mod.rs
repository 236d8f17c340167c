//! Adapters — filesystem implementations of the port traits

pub mod atomic_file;
pub mod json_logs;
pub mod json_settings;
