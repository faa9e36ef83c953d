//! Content hashing

use crate::types::SyncError;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Chunk size for streaming a file into the digest
pub const HASH_CHUNK_SIZE: usize = 8194;

/// Compute the SHA-256 digest of a file, URL-safe base64 encoded.
///
/// The file is streamed in fixed-size chunks; each chunk is fed through
/// the digest's writer and the accepted byte count is checked against the
/// read count. Two files have "the same content" iff these strings are
/// equal.
///
/// # Errors
/// * `SyncError::HashRead` - the file cannot be opened or a read fails
/// * `SyncError::HashShortWrite` - the digest accepted fewer bytes than
///   were read (defensive consistency check)
pub fn hash_file(path: &Path) -> Result<String, SyncError> {
    let mut file = File::open(path).map_err(|e| SyncError::HashRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; HASH_CHUNK_SIZE];

    loop {
        let read = file.read(&mut buffer).map_err(|e| SyncError::HashRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        if read == 0 {
            break;
        }

        let written = hasher
            .write(&buffer[..read])
            .map_err(|e| SyncError::HashRead {
                path: path.to_path_buf(),
                source: e,
            })?;

        if written != read {
            return Err(SyncError::HashShortWrite {
                path: path.to_path_buf(),
                read,
                written,
            });
        }
    }

    Ok(URL_SAFE.encode(hasher.finalize()))
}
