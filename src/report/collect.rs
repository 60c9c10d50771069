//! Gathers per-genome counts from a directory of GenBank files.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use num_format::Locale;
use num_format::ToFormattedString;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::Level;

use crate::errors::BuildError;
use crate::scan::compute::Scanner;
use crate::scan::results::CountRecord;

/// File name suffix that marks a GenBank file. Matched case-sensitively.
pub const GENBANK_EXTENSION: &str = ".gbk";

/// The counts for a single genome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportRow {
    /// Name of the genome, taken from the file name without its extension.
    pub genome_name: String,

    /// The counts produced by scanning the genome's file.
    pub record: CountRecord,
}

/// All of the rows produced by a batch, in the order the files were listed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReportTable {
    rows: Vec<ReportRow>,
}

impl ReportTable {
    /// Creates a new [`ReportTable`] from rows in their final order.
    pub fn new(rows: Vec<ReportRow>) -> Self {
        ReportTable { rows }
    }

    /// The rows of the table.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Counts summed over every row.
    pub fn totals(&self) -> CountRecord {
        let mut total = CountRecord::default();
        for row in &self.rows {
            total += row.record;
        }
        total
    }
}

/// Whether progress should be drawn. Progress is informational, so it is shown
/// only when INFO events would be logged.
fn show_progress() -> bool {
    tracing::enabled!(Level::INFO)
}

/// Builds the progress bar for a batch of `len` files.
fn progress_bar(len: u64) -> ProgressBar {
    if !show_progress() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{prefix:.cyan.bold} {spinner:.green} [{elapsed_precise}] [{bar}] {pos}/{len} {msg}")
            .progress_chars("=> "),
    );
    pb.set_prefix("Scanning");
    pb
}

/// Derives the genome name from a GenBank file name.
pub fn genome_name(file_name: &str) -> &str {
    file_name
        .strip_suffix(GENBANK_EXTENSION)
        .unwrap_or(file_name)
}

/// Lists the GenBank files within `directory` in the order the directory
/// listing yields them.
pub fn list_genbank_files<P>(directory: P) -> Result<Vec<PathBuf>, BuildError>
where
    P: AsRef<Path>,
{
    let directory = directory.as_ref();
    let unavailable = |source| BuildError::DirectoryUnavailable {
        path: directory.to_path_buf(),
        source,
    };

    let mut files = Vec::new();

    for entry in fs::read_dir(directory).map_err(unavailable)? {
        let entry = entry.map_err(unavailable)?;
        let name = entry.file_name();

        match name.to_str() {
            Some(n) if n.ends_with(GENBANK_EXTENSION) => files.push(entry.path()),
            Some(_) => {}
            None => debug!(
                "  [*] Skipping entry with a non UTF-8 name: {}",
                entry.path().display()
            ),
        }
    }

    Ok(files)
}

/// Scans every GenBank file within `directory`.
///
/// Files that cannot be scanned are logged and left out of the table. Only a
/// failure to list `directory` itself is an error.
pub fn collect<P>(directory: P, scanner: &Scanner) -> Result<ReportTable, BuildError>
where
    P: AsRef<Path>,
{
    let directory = directory.as_ref();
    let files = list_genbank_files(directory)?;

    info!(
        "Found {} GenBank files in {}.",
        files.len().to_formatted_string(&Locale::en),
        directory.display()
    );

    let pb = progress_bar(files.len() as u64);

    let mut rows = Vec::with_capacity(files.len());
    let mut skipped = 0usize;

    for path in files {
        // Names were already checked to be UTF-8 while listing.
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        pb.set_message(file_name.clone());

        match scanner.scan_file(&path) {
            Ok(record) => rows.push(ReportRow {
                genome_name: genome_name(&file_name).to_string(),
                record,
            }),
            Err(e) => {
                error!("  [*] Skipping file: {}", e);
                skipped += 1;
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if skipped > 0 {
        info!(
            "Scanned {} files, skipped {}.",
            rows.len().to_formatted_string(&Locale::en),
            skipped.to_formatted_string(&Locale::en)
        );
    } else {
        info!(
            "Scanned {} files.",
            rows.len().to_formatted_string(&Locale::en)
        );
    }

    Ok(ReportTable::new(rows))
}
