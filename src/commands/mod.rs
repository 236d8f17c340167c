//! Command handlers (the UI's request/response contract)
//!
//! Each module exposes plain handlers over `&AppState`, returning data or a
//! user-facing `String` error that never includes filesystem paths. With the
//! `desktop` feature, an `ipc` submodule wraps them as Tauri commands.

pub mod adif;
pub mod logs;
pub mod settings;
