//! Error types for dirsync

use std::path::PathBuf;
use thiserror::Error;

/// Error kinds for a reconciliation run.
///
/// The compare phase downgrades hash errors to warnings (the file pair is
/// skipped); everything else is fatal to the run. Separate variants keep
/// that asymmetry assertable in tests.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration (bad roots, src == dst)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Traversal or stat failure during a tree scan; aborts the whole scan
    #[error("Scan failed at {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read failure while hashing a file
    #[error("Hash read failed for {path}: {source}")]
    HashRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Digest accepted fewer bytes than were read from the file
    #[error("Hash short write for {path}: read {read} bytes, digest took {written}")]
    HashShortWrite {
        path: PathBuf,
        read: usize,
        written: usize,
    },

    /// Copy source is not a regular file
    #[error("{path} is not a regular file")]
    NotRegularFile { path: PathBuf },

    /// Bytes written by a copy differ from the source's reported size
    #[error("Copy size mismatch for {path}: expected {expected} bytes, wrote {written}")]
    SizeMismatch {
        path: PathBuf,
        expected: u64,
        written: u64,
    },

    /// Internal invariant violation: a record with no usable direction
    #[error("unknown direction to copy file (src -> dst OR dst -> src)")]
    UnknownDirection,
}

impl SyncError {
    /// Hash errors are logged and the file pair skipped rather than
    /// aborting the compare phase.
    pub fn is_hash_error(&self) -> bool {
        matches!(
            self,
            SyncError::HashRead { .. } | SyncError::HashShortWrite { .. }
        )
    }

    /// Configuration errors are reported before any scan begins
    pub fn is_config_error(&self) -> bool {
        matches!(self, SyncError::Config(_))
    }

    /// Copy errors abort the remaining resolution pass
    pub fn is_copy_error(&self) -> bool {
        matches!(
            self,
            SyncError::NotRegularFile { .. } | SyncError::SizeMismatch { .. }
        )
    }
}
