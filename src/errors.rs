//! Error types shared across the `gbstat` subcommands.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning a single GenBank file.
///
/// Both variants are per-file: a batch logs them and moves on to the next
/// file.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file could not be opened.
    #[error("could not open {}: {source}", .path.display())]
    NotFound {
        /// The file that was requested.
        path: PathBuf,

        /// The underlying error reported by the operating system.
        source: io::Error,
    },

    /// The file was opened, but reading from it failed part way through.
    #[error("failed reading {}: {source}", .path.display())]
    IoFailure {
        /// The file being read.
        path: PathBuf,

        /// The underlying read error.
        source: io::Error,
    },
}

/// Errors that abort a `gbstat report` batch.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The input directory does not exist or could not be listed.
    #[error("input directory is unavailable: {}: {source}", .path.display())]
    DirectoryUnavailable {
        /// The directory that was requested.
        path: PathBuf,

        /// The underlying error reported by the operating system.
        source: io::Error,
    },

    /// The summary table could not be written.
    #[error("could not write table to {}: {source}", .path.display())]
    TableWrite {
        /// The requested destination of the table.
        path: PathBuf,

        /// The underlying write error.
        source: io::Error,
    },

    /// The summary chart could not be written.
    #[error("could not write chart to {}: {source}", .path.display())]
    ChartWrite {
        /// The requested destination of the chart.
        path: PathBuf,

        /// The underlying write error.
        source: io::Error,
    },
}
