//! Directory tree scanning

use crate::types::{FileRecord, SyncError, TreeSnapshot};
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::trace;

/// Scan a root directory into a [`TreeSnapshot`].
///
/// Walks the tree recursively, recording every regular file keyed by its
/// root-relative path. Directories are traversed but not recorded; the
/// root itself is excluded. Symlinks and special files (sockets, devices,
/// pipes) are skipped.
///
/// Unlike the compare phase, scanning has no best-effort mode: any
/// traversal or stat failure aborts the scan with `SyncError::Scan` and
/// no partial snapshot is returned.
pub fn scan_tree(root: &Path) -> Result<TreeSnapshot, SyncError> {
    let start = Instant::now();
    let mut tree = TreeSnapshot::new(root.to_path_buf());

    // Standard filters off: unlike a backup tool honoring .gitignore, a
    // reconciler must see every file on both sides.
    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .build();

    for result in walker {
        let entry = result.map_err(|e| SyncError::Scan {
            path: root.to_path_buf(),
            source: io::Error::other(e),
        })?;

        if entry.depth() == 0 {
            continue; // the root is not an entry of its own snapshot
        }

        let Some(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            tree.increment_dirs();
            continue;
        }

        if !file_type.is_file() {
            trace!("skipping non-regular entry {}", entry.path().display());
            continue;
        }

        let metadata = entry.metadata().map_err(|e| SyncError::Scan {
            path: entry.path().to_path_buf(),
            source: io::Error::other(e),
        })?;

        let mtime = metadata.modified().map_err(|e| SyncError::Scan {
            path: entry.path().to_path_buf(),
            source: e,
        })?;

        let rel_path = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| SyncError::Scan {
                path: entry.path().to_path_buf(),
                source: io::Error::other(e),
            })?
            .to_path_buf();

        trace!("scanned {}", rel_path.display());
        tree.insert(FileRecord::new(
            entry.path().to_path_buf(),
            rel_path,
            metadata.len(),
            mtime,
        ));
    }

    tree.set_scan_duration(start.elapsed());
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().expect("create temp dir");

        let tree = scan_tree(temp_dir.path()).expect("scan should succeed on empty dir");

        assert!(tree.is_empty());
        assert_eq!(tree.total_files, 0);
        assert_eq!(tree.total_size, 0);
        assert_eq!(tree.root_path, temp_dir.path());
    }

    #[test]
    fn test_scan_single_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        fs::write(temp_dir.path().join("test.txt"), b"Hello, World!").expect("write file");

        let tree = scan_tree(temp_dir.path()).expect("scan should succeed");

        assert_eq!(tree.total_files, 1);
        assert_eq!(tree.total_size, 13);

        let record = tree
            .get(Path::new("test.txt"))
            .expect("record should exist");
        assert_eq!(record.rel_path, PathBuf::from("test.txt"));
        assert_eq!(record.abs_path, temp_dir.path().join("test.txt"));
        assert_eq!(record.size, 13);
        assert!(!record.has_hash());
    }

    #[test]
    fn test_scan_nested_directories() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path();

        fs::create_dir_all(root.join("a/b")).expect("create dirs");
        fs::create_dir(root.join("c")).expect("create dir");
        fs::write(root.join("a/b/file.txt"), b"File 1").expect("write file1");
        fs::write(root.join("c/file2.txt"), b"File 2 content").expect("write file2");

        let tree = scan_tree(root).expect("scan should succeed");

        assert_eq!(tree.total_files, 2);
        assert_eq!(tree.total_size, 6 + 14);
        assert_eq!(tree.total_dirs, 3, "a, a/b and c are traversed");
        assert!(tree.contains(Path::new("a/b/file.txt")));
        assert!(tree.contains(Path::new("c/file2.txt")));
    }

    #[test]
    fn test_scan_keys_are_root_relative() {
        // Identical layouts under different roots must produce identical
        // key sets, otherwise the differencer would see phantom diffs.
        let first = TempDir::new().expect("create temp dir");
        let second = TempDir::new().expect("create temp dir");

        for root in [first.path(), second.path()] {
            fs::create_dir(root.join("sub")).expect("create sub");
            fs::write(root.join("sub/file.txt"), b"same").expect("write file");
        }

        let tree_a = scan_tree(first.path()).expect("scan first");
        let tree_b = scan_tree(second.path()).expect("scan second");

        assert_eq!(tree_a.sorted_paths(), tree_b.sorted_paths());
    }

    #[test]
    fn test_scan_does_not_record_directories() {
        let temp_dir = TempDir::new().expect("create temp dir");
        fs::create_dir(temp_dir.path().join("empty_dir")).expect("create dir");

        let tree = scan_tree(temp_dir.path()).expect("scan should succeed");

        assert!(tree.is_empty());
        assert_eq!(tree.total_dirs, 1);
    }

    #[test]
    #[cfg(unix)]
    fn test_scan_skips_symlinks() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path();
        fs::write(root.join("target.txt"), b"content").expect("write target");
        std::os::unix::fs::symlink(root.join("target.txt"), root.join("link.txt"))
            .expect("create symlink");

        let tree = scan_tree(root).expect("scan should succeed");

        assert!(tree.contains(Path::new("target.txt")));
        assert!(
            !tree.contains(Path::new("link.txt")),
            "symlinks are not regular files and must be skipped"
        );
    }

    #[test]
    fn test_scan_missing_root_fails() {
        let err = scan_tree(Path::new("/nonexistent/scan/root")).unwrap_err();
        assert!(matches!(err, SyncError::Scan { .. }));
    }

    #[test]
    fn test_scan_records_duration() {
        let temp_dir = TempDir::new().expect("create temp dir");
        fs::write(temp_dir.path().join("f.txt"), b"x").expect("write file");

        let tree = scan_tree(temp_dir.path()).expect("scan should succeed");
        assert!(tree.scan_duration > std::time::Duration::from_secs(0));
    }
}
