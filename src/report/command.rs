//! Functionality relating to the `gbstat report` subcommand itself.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use num_format::Locale;
use num_format::ToFormattedString;
use tracing::debug;
use tracing::info;

use crate::report::build;
use crate::report::table::to_pretty_table;
use crate::report::ReportConfig;
use crate::utils::display::PercentageFormat;

//========================//
// Command line arguments //
//========================//

/// Clap arguments for the `gbstat report` subcommand.
#[derive(Args)]
pub struct ReportArgs {
    /// Directory containing the `.gbk` files to summarize.
    #[arg(value_name = "DIR")]
    src: PathBuf,

    /// Path of the CSV table to write.
    #[arg(short, long, value_name = "PATH", default_value = "genome_summary.csv")]
    table: PathBuf,

    /// Path of the SVG chart to write.
    #[arg(short, long, value_name = "PATH", default_value = "genome_summary.svg")]
    chart: PathBuf,
}

//==============//
// Main command //
//==============//

/// Main function for the `gbstat report` subcommand.
pub fn report(args: ReportArgs) -> anyhow::Result<()> {
    info!("Starting report command...");
    debug!("Arguments:");
    debug!("  [*] Source: {}", args.src.display());
    debug!("  [*] Table: {}", args.table.display());
    debug!("  [*] Chart: {}", args.chart.display());

    let config = ReportConfig {
        src: args.src,
        table: args.table,
        chart: args.chart,
    };

    let table = build(&config)
        .with_context(|| format!("building report for {}", config.src.display()))?;

    let totals = table.totals();
    info!(
        "Summarized {} genomes: {} CDS, {} products ({} hypothetical).",
        table.rows().len().to_formatted_string(&Locale::en),
        totals.cds_count.to_formatted_string(&Locale::en),
        totals.product_count.to_formatted_string(&Locale::en),
        PercentageFormat(totals.hypothetical_protein_count, totals.product_count),
    );

    to_pretty_table(&table).printstd();

    Ok(())
}
