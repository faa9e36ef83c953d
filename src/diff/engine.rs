//! Tree comparison logic

use crate::hash::hash_file;
use crate::types::{ComparisonRecord, Direction, FileRecord, TreeSnapshot};
use crate::ui::Reporter;
use std::cmp::Ordering;
use tracing::debug;

/// Compare two snapshots and produce the ordered difference list.
///
/// Two passes over sorted relative paths:
/// 1. Source keys: missing in destination → SrcToDst (no hashing);
///    present with a strictly older destination mtime → hash both, emit
///    SrcToDst on mismatch; strictly newer → hash both, emit DstToSrc on
///    mismatch; equal mtime → nothing.
/// 2. Destination-only keys → DstToSrc.
///
/// Timestamps decide the presumed direction; hashes are the arbiter only
/// when timestamps disagree, so unchanged trees cost no content reads.
/// Files with equal mtimes are assumed identical without hashing - a
/// deliberate trade-off that leans on the mtime fidelity of both trees.
///
/// Hashing failures are reported as warnings and the pair is skipped;
/// the compare phase never aborts the run.
pub fn compare_trees(
    source: &TreeSnapshot,
    dest: &TreeSnapshot,
    reporter: &Reporter,
) -> Vec<ComparisonRecord> {
    let mut records = Vec::new();

    debug!(
        "comparing {} source files against {} destination files",
        source.total_files, dest.total_files
    );

    for rel_path in source.sorted_paths() {
        let Some(src_rec) = source.get(rel_path) else {
            continue;
        };

        let Some(dst_rec) = dest.get(rel_path) else {
            debug!("adding {}: destination is missing file", rel_path.display());
            records.push(ComparisonRecord::source_only(src_rec.clone()));
            continue;
        };

        let direction = match dst_rec.mtime.cmp(&src_rec.mtime) {
            Ordering::Less => Direction::SrcToDst,
            Ordering::Greater => Direction::DstToSrc,
            // Equal mtimes are assumed identical; content is not checked.
            Ordering::Equal => continue,
        };

        let Some((src_hashed, dst_hashed)) = hash_pair(src_rec, dst_rec, reporter) else {
            continue;
        };

        if src_hashed.hash == dst_hashed.hash {
            debug!("skipping {}: content identical", rel_path.display());
            continue;
        }

        debug!(
            "adding {}: mtime conflict with differing content",
            rel_path.display()
        );
        records.push(ComparisonRecord::conflict(src_hashed, dst_hashed, direction));
    }

    for rel_path in dest.sorted_paths() {
        if source.contains(rel_path) {
            continue;
        }
        if let Some(dst_rec) = dest.get(rel_path) {
            debug!("adding {}: source is missing file", rel_path.display());
            records.push(ComparisonRecord::dest_only(dst_rec.clone()));
        }
    }

    records
}

/// Hash both sides of a timestamp conflict.
///
/// Returns clones of the records carrying their digests, or `None` when
/// either hash fails (the failure is reported, the pair skipped).
fn hash_pair(
    src_rec: &FileRecord,
    dst_rec: &FileRecord,
    reporter: &Reporter,
) -> Option<(FileRecord, FileRecord)> {
    let src_hash = match hash_file(&src_rec.abs_path) {
        Ok(hash) => hash,
        Err(e) => {
            reporter.hash_warning(&src_rec.abs_path, &e);
            return None;
        }
    };

    let dst_hash = match hash_file(&dst_rec.abs_path) {
        Ok(hash) => hash,
        Err(e) => {
            reporter.hash_warning(&dst_rec.abs_path, &e);
            return None;
        }
    };

    Some((
        src_rec.clone().with_hash(src_hash),
        dst_rec.clone().with_hash(dst_hash),
    ))
}
