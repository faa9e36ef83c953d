//! User-facing output

mod report;

pub use report::Reporter;
