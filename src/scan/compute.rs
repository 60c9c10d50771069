//! Module holding the logic for scanning a GenBank file for CDS annotations.
//!
//! The scanner makes a single forward pass over the lines of a file and never
//! looks ahead. It only relies on a handful of markers from the GenBank flat
//! file layout:
//!
//! * feature keys `CDS`, `tRNA`, and `rRNA` at the start of a (trimmed) line,
//!   matched case-sensitively;
//! * the `/translation="` qualifier, whose payload may span many lines and is
//!   never inspected;
//! * the `product=` and `gene=` qualifiers and the phrase
//!   `hypothetical protein`, matched case-insensitively anywhere on a line.

use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::errors::ScanError;
use crate::scan::results::CountRecord;

/// Feature key that opens a coding sequence block.
const CDS_MARKER: &str = "CDS";

/// Feature keys that close any open coding sequence block.
const RNA_MARKERS: [&str; 2] = ["tRNA", "rRNA"];

/// Qualifier that opens a (possibly multi-line) translation payload.
const TRANSLATION_MARKER: &str = "/translation=\"";

/// Per-file state carried from one line to the next.
#[derive(Debug, Default)]
struct ScanState {
    /// Whether we are within a `/translation="..."` payload.
    inside_translation_block: bool,

    /// Whether qualifiers on the current line belong to a CDS feature.
    inside_cds_block: bool,

    /// Whether the current CDS block has already had its product counted.
    current_cds_has_product: bool,
}

/// Scans GenBank files for CDS annotations.
///
/// A [`Scanner`] holds only the compiled qualifier patterns; all per-file
/// state lives inside a single call to [`Scanner::scan_reader`], so one
/// scanner can be reused across any number of files.
#[derive(Debug)]
pub struct Scanner {
    product: Regex,
    gene: Regex,
    hypothetical: Regex,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// Creates a new [`Scanner`].
    pub fn new() -> Self {
        Scanner {
            product: Regex::new("(?i)product=").expect("the product pattern to compile"),
            gene: Regex::new("(?i)gene=").expect("the gene pattern to compile"),
            hypothetical: Regex::new("(?i)hypothetical protein")
                .expect("the hypothetical protein pattern to compile"),
        }
    }

    /// Opens the file at `path` and scans it.
    pub fn scan_file<P>(&self, path: P) -> Result<CountRecord, ScanError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ScanError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let record = self
            .scan_reader(BufReader::new(file))
            .map_err(|source| ScanError::IoFailure {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("  [*] {}: {:?}", path.display(), record);
        Ok(record)
    }

    /// Scans every line available from `reader`.
    pub fn scan_reader<R>(&self, reader: R) -> io::Result<CountRecord>
    where
        R: BufRead,
    {
        let mut state = ScanState::default();
        let mut record = CountRecord::default();

        for result in reader.lines() {
            let line = result?;
            self.process_line(&line, &mut state, &mut record);
        }

        Ok(record)
    }

    /// Advances the scan by one line.
    fn process_line(&self, line: &str, state: &mut ScanState, record: &mut CountRecord) {
        let trimmed = line.trim();

        if trimmed.starts_with(TRANSLATION_MARKER) {
            state.inside_translation_block = true;
        }

        // Translation payloads are skipped wholesale. A payload that never
        // closes swallows the rest of the file.
        if state.inside_translation_block {
            if trimmed.ends_with('"') {
                state.inside_translation_block = false;
            }
            return;
        }

        if RNA_MARKERS.iter().any(|m| trimmed.starts_with(m)) {
            state.inside_cds_block = false;
        }

        if trimmed.starts_with(CDS_MARKER) {
            record.cds_count += 1;
            state.inside_cds_block = true;
            state.current_cds_has_product = false;
            return;
        }

        if !state.inside_cds_block {
            return;
        }

        if !state.current_cds_has_product && self.product.is_match(line) {
            record.product_count += 1;
            state.current_cds_has_product = true;

            if self.hypothetical.is_match(line) {
                record.hypothetical_protein_count += 1;
            } else {
                record.non_hypothetical_gene_count += 1;
            }
        }

        if self.gene.is_match(line) {
            record.gene_count += 1;
        }

        if trimmed.is_empty() {
            state.inside_cds_block = false;
        }
    }
}

/// Scans the GenBank file at `path` with a freshly constructed [`Scanner`].
pub fn scan<P>(path: P) -> Result<CountRecord, ScanError>
where
    P: AsRef<Path>,
{
    Scanner::new().scan_file(path)
}
