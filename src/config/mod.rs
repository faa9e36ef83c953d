//! Configuration and command-line interface

use crate::types::SyncError;
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

/// Two-way directory reconciliation tool
#[derive(Parser, Debug)]
#[command(name = "dirsync", version, about, long_about = None)]
pub struct Cli {
    /// Source directory root
    #[arg(long, value_name = "DIR")]
    pub src: PathBuf,

    /// Destination directory root
    #[arg(long, value_name = "DIR")]
    pub dst: PathBuf,

    /// Never copy destination files back into the source tree
    #[arg(long)]
    pub skipsrc: bool,

    /// Report planned copies without touching the filesystem
    #[arg(long)]
    pub dryrun: bool,

    /// Diagnostic logging level
    #[arg(long, value_enum, default_value_t = Verbosity::Standard)]
    pub logging: Verbosity,
}

/// Diagnostic verbosity, mapped onto the tracing level filter
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings only
    #[default]
    Standard,

    /// Per-phase diagnostics
    Verbose,

    /// Per-file diagnostics
    Debug,
}

impl Verbosity {
    pub fn tracing_level(self) -> tracing::Level {
        match self {
            Verbosity::Standard => tracing::Level::WARN,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}

/// Options for one reconciliation run. Immutable once built.
#[derive(Debug, Clone)]
pub struct Config {
    /// Canonicalized source root
    pub source_root: PathBuf,

    /// Canonicalized destination root
    pub dest_root: PathBuf,

    /// Suppress DstToSrc copies (source tree is never written to)
    pub skip_source_update: bool,

    /// Report only, no filesystem mutation
    pub dry_run: bool,

    /// Diagnostic verbosity
    pub verbosity: Verbosity,
}

impl Config {
    pub fn new(source_root: PathBuf, dest_root: PathBuf) -> Self {
        Self {
            source_root,
            dest_root,
            skip_source_update: false,
            dry_run: false,
            verbosity: Verbosity::Standard,
        }
    }

    /// Validate both roots: they must exist, be directories, and differ.
    pub fn validate(&self) -> Result<(), SyncError> {
        validate_root("src", &self.source_root)?;
        validate_root("dst", &self.dest_root)?;

        if self.source_root == self.dest_root {
            return Err(SyncError::Config(
                "source and destination cannot be the same directory".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_root(label: &str, path: &Path) -> Result<(), SyncError> {
    let metadata = fs::metadata(path).map_err(|e| {
        SyncError::Config(format!("invalid {}={}: {}", label, path.display(), e))
    })?;

    if !metadata.is_dir() {
        return Err(SyncError::Config(format!(
            "invalid {}={}: not a directory",
            label,
            path.display()
        )));
    }

    Ok(())
}

impl TryFrom<Cli> for Config {
    type Error = SyncError;

    /// Convert parsed CLI flags into a validated run configuration.
    ///
    /// Relative roots are canonicalized to absolute paths up front so the
    /// scanner's prefix stripping works regardless of the working
    /// directory.
    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let source_root = canonicalize_root("src", &cli.src)?;
        let dest_root = canonicalize_root("dst", &cli.dst)?;

        let config = Config {
            source_root,
            dest_root,
            skip_source_update: cli.skipsrc,
            dry_run: cli.dryrun,
            verbosity: cli.logging,
        };
        config.validate()?;

        Ok(config)
    }
}

fn canonicalize_root(label: &str, path: &Path) -> Result<PathBuf, SyncError> {
    path.canonicalize().map_err(|e| {
        SyncError::Config(format!(
            "invalid {}={}: must provide a valid directory ({})",
            label,
            path.display(),
            e
        ))
    })
}
