//! Crash-safe file writes
//!
//! Content is written to a temp file in the destination directory and then
//! moved into place, so readers see either the old file or the complete new
//! one. `write_new` additionally refuses to replace an existing file, making
//! the existence check and the write a single step.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Atomically replace (or create) `path` with `contents`.
pub fn write_replace(path: &Path, contents: &[u8]) -> io::Result<()> {
    let tmp = write_temp_beside(path, contents)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Atomically create `path` with `contents`.
///
/// Fails with `ErrorKind::AlreadyExists` if `path` already exists; the
/// existing file is left untouched.
pub fn write_new(path: &Path, contents: &[u8]) -> io::Result<()> {
    let tmp = write_temp_beside(path, contents)?;
    tmp.persist_noclobber(path).map_err(|e| e.error)?;
    Ok(())
}

fn write_temp_beside(path: &Path, contents: &[u8]) -> io::Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}
