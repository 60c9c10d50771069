//! Functionality related to the `gbstat report` subcommand.
//!
//! A report is built in three steps: every GenBank file in the input
//! directory is scanned ([`collect`]), the resulting rows are written as a CSV
//! table ([`table`]), and the classification of each genome's products is
//! drawn as a stacked bar chart ([`chart`]). Both artifacts are written only
//! after every file has been scanned.

pub mod chart;
pub mod collect;
pub mod command;
pub mod table;

use std::path::PathBuf;

use tracing::info;

use crate::errors::BuildError;
use crate::report::chart::ChartSpec;
use crate::report::collect::ReportTable;
use crate::scan::compute::Scanner;

/// Where a report reads its inputs from and writes its artifacts to.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Directory containing the `.gbk` files to scan.
    pub src: PathBuf,

    /// Destination of the CSV table.
    pub table: PathBuf,

    /// Destination of the SVG chart.
    pub chart: PathBuf,
}

/// Scans the input directory and writes both artifacts.
///
/// If the input directory cannot be listed, nothing is written. The table is
/// written before the chart, so a chart failure leaves a complete table
/// behind.
pub fn build(config: &ReportConfig) -> Result<ReportTable, BuildError> {
    let table = collect::collect(&config.src, &Scanner::new())?;

    info!("Writing table to {}.", config.table.display());
    table::write(&table, &config.table)?;

    info!("Writing chart to {}.", config.chart.display());
    chart::write(&ChartSpec::from(&table), &config.chart)?;

    Ok(table)
}
