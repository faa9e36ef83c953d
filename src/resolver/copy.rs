//! Copy subroutine

use crate::types::SyncError;
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Create every missing parent directory of `target`.
///
/// Idempotent: an already-existing directory is not an error.
pub fn ensure_parent_dir(target: &Path) -> Result<(), SyncError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Stream `src` to `dest` and return the number of bytes written.
///
/// The source must be a regular file. After the copy, the written byte
/// count is checked against the source's reported size to catch
/// truncated or partial writes.
///
/// # Errors
/// * `SyncError::NotRegularFile` - source is a directory, symlink target
///   of the wrong kind, or special file
/// * `SyncError::SizeMismatch` - written bytes differ from source size
/// * `SyncError::Io` - open/create/read/write failure
pub fn copy_file(src: &Path, dest: &Path) -> Result<u64, SyncError> {
    let metadata = fs::metadata(src)?;

    if !metadata.is_file() {
        return Err(SyncError::NotRegularFile {
            path: src.to_path_buf(),
        });
    }

    let mut reader = File::open(src)?;
    let mut writer = File::create(dest)?;
    let written = io::copy(&mut reader, &mut writer)?;

    if written != metadata.len() {
        return Err(SyncError::SizeMismatch {
            path: src.to_path_buf(),
            expected: metadata.len(),
            written,
        });
    }

    Ok(written)
}
