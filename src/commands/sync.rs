//! Main reconciliation command

use crate::config::Config;
use crate::diff::compare_trees;
use crate::resolver::apply_records;
use crate::scanner::scan_tree;
use crate::types::SyncError;
use crate::ui::Reporter;
use tracing::debug;

/// Run one reconciliation: scan both roots, diff, resolve, report.
///
/// Snapshots live only for this invocation; nothing is persisted between
/// runs. Scan failures abort before any mutation; copy failures abort
/// mid-pass and leave earlier copies in place.
pub fn run(config: &Config, reporter: &Reporter) -> Result<(), SyncError> {
    reporter.banner(config);

    debug!("scanning source {}", config.source_root.display());
    let source = scan_tree(&config.source_root)?;
    reporter.scan_summary("source", &source);

    debug!("scanning destination {}", config.dest_root.display());
    let dest = scan_tree(&config.dest_root)?;
    reporter.scan_summary("destination", &dest);

    let records = compare_trees(&source, &dest, reporter);
    if records.is_empty() {
        reporter.no_differences();
        reporter.done(config.dry_run);
        return Ok(());
    }

    debug!("resolving {} difference(s)", records.len());
    let stats = apply_records(&records, config, reporter)?;

    if !config.dry_run {
        reporter.applied_summary(&stats);
    }
    reporter.done(config.dry_run);

    Ok(())
}
