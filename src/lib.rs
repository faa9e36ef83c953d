//! # dirsync - two-way directory reconciliation
//!
//! Scans a source and a destination tree, decides a copy direction for
//! every difference (modification time first, content hash as the
//! tie-break), and applies the copies - or simulates them in a dry run.

// Module declarations
pub mod commands;
pub mod config;
pub mod diff;
pub mod hash;
pub mod resolver;
pub mod scanner;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::{Config, Verbosity};
pub use types::{ComparisonRecord, Direction, FileRecord, SyncError, TreeSnapshot};
pub use ui::Reporter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
