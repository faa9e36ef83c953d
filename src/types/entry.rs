//! FileRecord - a single regular file observed during a tree scan

use std::path::PathBuf;
use std::time::SystemTime;

/// Metadata for one regular file inside a scanned tree.
///
/// Records are produced exclusively by the scanner and never mutated
/// afterwards; the only late-bound field is the content hash, which the
/// differencer fills in on a cloned record when a timestamp conflict
/// forces a content comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    /// Absolute path on disk
    pub abs_path: PathBuf,

    /// Path relative to the scan root (unique key within one tree)
    pub rel_path: PathBuf,

    /// On-disk size in bytes at scan time
    pub size: u64,

    /// Last modification time
    pub mtime: SystemTime,

    /// URL-safe base64 SHA-256 digest, computed lazily
    pub hash: Option<String>,
}

impl FileRecord {
    pub fn new(abs_path: PathBuf, rel_path: PathBuf, size: u64, mtime: SystemTime) -> Self {
        Self {
            abs_path,
            rel_path,
            size,
            mtime,
            hash: None,
        }
    }

    /// Return a copy of this record carrying a computed content hash
    pub fn with_hash(mut self, hash: String) -> Self {
        self.hash = Some(hash);
        self
    }

    /// Check whether a content hash has been computed for this record
    pub fn has_hash(&self) -> bool {
        self.hash.is_some()
    }
}
