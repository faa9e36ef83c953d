//! ComparisonRecord - one difference between the two trees

use super::FileRecord;
use std::path::Path;

/// Transfer direction decided by the differencer.
///
/// `Unknown` is the default value and never produced by the differencer;
/// the resolver treats it as an internal invariant violation and aborts
/// the run when it sees one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Unknown,

    /// Copy the source file over the destination
    SrcToDst,

    /// Copy the destination file back into the source tree
    DstToSrc,
}

impl Direction {
    /// Short tag used in report output
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Unknown => "[???]",
            Direction::SrcToDst => "[SRC -> DST]",
            Direction::DstToSrc => "[DST -> SRC]",
        }
    }
}

/// One file-level difference between source and destination.
///
/// Exactly one of `source`/`dest` may be absent (the file exists on one
/// side only). When both are present the record was emitted because the
/// content hashes differed, and both records carry their hashes.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRecord {
    pub source: Option<FileRecord>,
    pub dest: Option<FileRecord>,
    pub direction: Direction,
}

impl ComparisonRecord {
    /// File exists only in the source tree
    pub fn source_only(source: FileRecord) -> Self {
        Self {
            source: Some(source),
            dest: None,
            direction: Direction::SrcToDst,
        }
    }

    /// File exists only in the destination tree
    pub fn dest_only(dest: FileRecord) -> Self {
        Self {
            source: None,
            dest: Some(dest),
            direction: Direction::DstToSrc,
        }
    }

    /// File exists on both sides with differing content
    pub fn conflict(source: FileRecord, dest: FileRecord, direction: Direction) -> Self {
        Self {
            source: Some(source),
            dest: Some(dest),
            direction,
        }
    }

    /// Relative path of the file this record describes
    pub fn rel_path(&self) -> &Path {
        match (&self.source, &self.dest) {
            (Some(src), _) => &src.rel_path,
            (None, Some(dst)) => &dst.rel_path,
            (None, None) => Path::new(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{Duration, UNIX_EPOCH};

    fn record(rel: &str, mtime_secs: u64) -> FileRecord {
        FileRecord::new(
            PathBuf::from("/root").join(rel),
            PathBuf::from(rel),
            8,
            UNIX_EPOCH + Duration::from_secs(mtime_secs),
        )
    }

    #[test]
    fn test_source_only_direction() {
        let rec = ComparisonRecord::source_only(record("a.txt", 100));
        assert_eq!(rec.direction, Direction::SrcToDst);
        assert!(rec.source.is_some());
        assert!(rec.dest.is_none());
        assert_eq!(rec.rel_path(), Path::new("a.txt"));
    }

    #[test]
    fn test_dest_only_direction() {
        let rec = ComparisonRecord::dest_only(record("b.txt", 100));
        assert_eq!(rec.direction, Direction::DstToSrc);
        assert!(rec.source.is_none());
        assert!(rec.dest.is_some());
        assert_eq!(rec.rel_path(), Path::new("b.txt"));
    }

    #[test]
    fn test_conflict_keeps_both_sides() {
        let rec = ComparisonRecord::conflict(
            record("c.txt", 200),
            record("c.txt", 100),
            Direction::SrcToDst,
        );
        assert!(rec.source.is_some());
        assert!(rec.dest.is_some());
        assert_eq!(rec.direction, Direction::SrcToDst);
    }

    #[test]
    fn test_default_direction_is_unknown() {
        assert_eq!(Direction::default(), Direction::Unknown);
    }

    #[test]
    fn test_direction_labels() {
        assert_eq!(Direction::SrcToDst.label(), "[SRC -> DST]");
        assert_eq!(Direction::DstToSrc.label(), "[DST -> SRC]");
    }
}
