//! Core type definitions for dirsync

mod entry;
mod error;
mod record;
mod tree;

pub use entry::FileRecord;
pub use error::SyncError;
pub use record::{ComparisonRecord, Direction};
pub use tree::TreeSnapshot;
