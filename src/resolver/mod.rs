//! Resolver - applies the differencer's records to the filesystem

mod copy;

pub use copy::{copy_file, ensure_parent_dir};

use crate::config::Config;
use crate::types::{ComparisonRecord, Direction, SyncError};
use crate::ui::Reporter;
use std::path::PathBuf;
use tracing::debug;

/// One copy performed (not simulated) during resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedCopy {
    pub direction: Direction,
    pub rel_path: PathBuf,
    pub bytes: u64,
}

/// Outcome of a resolution pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Copies actually written, in application order
    pub applied: Vec<AppliedCopy>,

    /// DstToSrc records suppressed by skip_source_update
    pub skipped_reverse: usize,

    /// Aggregate bytes written
    pub bytes_copied: u64,
}

/// Apply the comparison records in emission order.
///
/// SrcToDst copies are always performed; DstToSrc copies are skipped when
/// `skip_source_update` is set. In dry-run mode every record is still
/// reported but nothing on disk changes - no directories are created and
/// no file is written.
///
/// Copy failures are fatal: the pass stops at the failing record and
/// files copied before it remain copied (no rollback). A record with an
/// unknown direction, or one whose designated side is absent, is an
/// internal defect and aborts with `SyncError::UnknownDirection`.
pub fn apply_records(
    records: &[ComparisonRecord],
    config: &Config,
    reporter: &Reporter,
) -> Result<ResolveStats, SyncError> {
    let mut stats = ResolveStats::default();

    for record in records {
        let (file, target_root) = match record.direction {
            Direction::SrcToDst => (record.source.as_ref(), &config.dest_root),
            Direction::DstToSrc => {
                if config.skip_source_update {
                    debug!(
                        "skipping {}: source updates are disabled",
                        record.rel_path().display()
                    );
                    reporter.skip_reverse(record.rel_path());
                    stats.skipped_reverse += 1;
                    continue;
                }
                (record.dest.as_ref(), &config.source_root)
            }
            Direction::Unknown => return Err(SyncError::UnknownDirection),
        };

        // The designated side is always present on records the
        // differencer emits; anything else is the same class of internal
        // defect as an unknown direction.
        let Some(file) = file else {
            return Err(SyncError::UnknownDirection);
        };

        let target = target_root.join(&file.rel_path);
        reporter.record_action(record, config.dry_run);

        if config.dry_run {
            debug!(
                "dry run: would copy {} to {}",
                file.abs_path.display(),
                target.display()
            );
            continue;
        }

        ensure_parent_dir(&target)?;
        let bytes = copy_file(&file.abs_path, &target)?;

        stats.bytes_copied += bytes;
        stats.applied.push(AppliedCopy {
            direction: record.direction,
            rel_path: file.rel_path.clone(),
            bytes,
        });
    }

    Ok(stats)
}
