//! TreeSnapshot - one scanned directory tree

use super::FileRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Snapshot of one root directory, keyed by root-relative path.
///
/// Built from scratch on every run and immutable once the scan returns;
/// nothing downstream writes back into it.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeSnapshot {
    /// Map: relative path → FileRecord
    pub entries: HashMap<PathBuf, FileRecord>,

    /// Aggregate statistics
    pub total_size: u64,
    pub total_files: usize,
    pub total_dirs: usize,

    /// Scan metadata
    pub scan_duration: Duration,
    pub root_path: PathBuf,
}

impl TreeSnapshot {
    /// Create a new empty snapshot for the given root
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            entries: HashMap::new(),
            total_size: 0,
            total_files: 0,
            total_dirs: 0,
            scan_duration: Duration::from_secs(0),
            root_path,
        }
    }

    /// Insert a file record, tracking its on-disk size for the scan summary.
    ///
    /// Re-inserting an existing relative path replaces the old record and
    /// its size contribution, so the totals stay accurate.
    pub fn insert(&mut self, record: FileRecord) {
        let key = record.rel_path.clone();
        self.total_size += record.size;
        match self.entries.insert(key, record) {
            Some(old) => self.total_size -= old.size,
            None => self.total_files += 1,
        }
    }

    /// Look up a record by relative path
    pub fn get(&self, rel_path: &Path) -> Option<&FileRecord> {
        self.entries.get(rel_path)
    }

    /// Check whether a relative path exists in this snapshot
    pub fn contains(&self, rel_path: &Path) -> bool {
        self.entries.contains_key(rel_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterator over (relative path, record) pairs, in map order
    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &FileRecord)> {
        self.entries.iter()
    }

    /// Iterator over the relative paths
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.keys()
    }

    /// Relative paths in lexicographic order.
    ///
    /// The differencer walks snapshots in this order so its output (and
    /// therefore the resolver's copy order) is deterministic.
    pub fn sorted_paths(&self) -> Vec<&PathBuf> {
        let mut paths: Vec<&PathBuf> = self.entries.keys().collect();
        paths.sort();
        paths
    }

    pub fn set_scan_duration(&mut self, duration: Duration) {
        self.scan_duration = duration;
    }

    /// Count a traversed directory (directories are not recorded as entries)
    pub fn increment_dirs(&mut self) {
        self.total_dirs += 1;
    }
}
