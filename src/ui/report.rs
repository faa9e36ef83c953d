//! Run reporting
//!
//! All user-facing output goes through an explicit [`Reporter`] handed to
//! each component; diagnostic logging (tracing) is separate and driven by
//! the --logging flag.

use crate::config::{Config, Verbosity};
use crate::resolver::ResolveStats;
use crate::types::{ComparisonRecord, Direction, SyncError, TreeSnapshot};
use chrono::{DateTime, Local};
use console::style;
use indicatif::HumanBytes;
use std::path::Path;
use std::time::SystemTime;

/// Prints the human-readable account of a run: configuration banner, scan
/// summaries, per-record copy lines with hash/timestamp detail, and the
/// final applied-copies listing.
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Echo the resolved configuration before the first scan
    pub fn banner(&self, config: &Config) {
        println!("dirsync v{}", env!("CARGO_PKG_VERSION"));
        println!("  Src Path: {}", config.source_root.display());
        println!("  Dst Path: {}", config.dest_root.display());
        println!("  Skip Src: {}", config.skip_source_update);
        println!("  Dry Run:  {}", config.dry_run);
        println!();
    }

    /// Summarize one finished scan
    pub fn scan_summary(&self, label: &str, tree: &TreeSnapshot) {
        println!(
            "Scanned {}: {} files | {} in {:?}",
            label,
            tree.total_files,
            HumanBytes(tree.total_size),
            tree.scan_duration
        );
    }

    /// Warn that a file pair was skipped because hashing failed.
    ///
    /// The compare phase is best-effort: this is a warning, not a run
    /// failure.
    pub fn hash_warning(&self, path: &Path, error: &SyncError) {
        eprintln!(
            "{} could not hash {}: {}",
            style("warning:").yellow().bold(),
            path.display(),
            error
        );
    }

    /// Report one record being applied (or simulated)
    pub fn record_action(&self, record: &ComparisonRecord, dry_run: bool) {
        let tag = match record.direction {
            Direction::SrcToDst => style(record.direction.label()).green(),
            Direction::DstToSrc => style(record.direction.label()).cyan(),
            Direction::Unknown => style(record.direction.label()).red(),
        };
        let verb = if dry_run { "Diff:" } else { "Copying..." };
        println!("{} {} {}", tag, verb, record.rel_path().display());

        self.record_detail(record);
        if self.verbosity != Verbosity::Standard {
            if let (Some(src), Some(dst)) = (&record.source, &record.dest) {
                println!(
                    "\tPaths: {} and {}",
                    src.abs_path.display(),
                    dst.abs_path.display()
                );
            }
        }
    }

    /// Explain why the record exists: a missing counterpart, a hash
    /// mismatch, or (when no hashes were computed) a timestamp mismatch.
    fn record_detail(&self, record: &ComparisonRecord) {
        match (&record.source, &record.dest) {
            (Some(_), None) => println!("\tDestination file does not exist"),
            (None, Some(_)) => println!("\tSource file does not exist"),
            (Some(src), Some(dst)) => match (&src.hash, &dst.hash) {
                (Some(src_hash), Some(dst_hash)) if src_hash != dst_hash => {
                    println!("\tHash mismatch: {} -> {}", src_hash, dst_hash);
                }
                _ => {
                    println!(
                        "\tSrc Mod Time: {} != Dst Mod Time: {}",
                        format_mtime(src.mtime),
                        format_mtime(dst.mtime)
                    );
                }
            },
            (None, None) => {}
        }
    }

    /// Note a reverse update suppressed by --skipsrc
    pub fn skip_reverse(&self, rel_path: &Path) {
        println!(
            "{} skipping source update for {}",
            style("[SKIP]").yellow(),
            rel_path.display()
        );
    }

    /// Nothing differed between the trees
    pub fn no_differences(&self) {
        println!("No differences found.");
    }

    /// List every applied copy, grouped by direction
    pub fn applied_summary(&self, stats: &ResolveStats) {
        if stats.applied.is_empty() {
            return;
        }

        println!();
        println!("Copied files:");
        for direction in [Direction::SrcToDst, Direction::DstToSrc] {
            for copy in stats.applied.iter().filter(|c| c.direction == direction) {
                println!("{} Copied {}", direction.label(), copy.rel_path.display());
            }
        }
        println!(
            "Total: {} file(s), {}",
            stats.applied.len(),
            HumanBytes(stats.bytes_copied)
        );
    }

    /// Final status line
    pub fn done(&self, dry_run: bool) {
        if dry_run {
            println!("Dry run complete: no changes were made.");
        } else {
            println!("{}", style("Diff Completed!").green());
        }
    }
}

fn format_mtime(mtime: SystemTime) -> String {
    DateTime::<Local>::from(mtime)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}
