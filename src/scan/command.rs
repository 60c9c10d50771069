//! Functionality relating to the `gbstat scan` subcommand itself.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::debug;
use tracing::info;

use crate::scan::compute::Scanner;

/// Clap arguments for the `gbstat scan` subcommand.
#[derive(Args)]
pub struct ScanArgs {
    /// Source GenBank file.
    #[arg(value_name = "GBK")]
    src: PathBuf,
}

/// Main function for the `gbstat scan` subcommand.
pub fn scan(args: ScanArgs) -> anyhow::Result<()> {
    info!("Starting scan subcommand.");
    debug!("  [*] Source: {}", args.src.display());

    let record = Scanner::new()
        .scan_file(&args.src)
        .with_context(|| format!("scanning {}", args.src.display()))?;

    // Print the output to stdout as JSON (more support for different output
    // types may be added in the future, but for now, only JSON).
    let output = serde_json::to_string_pretty(&record)?;
    println!("{}", output);

    Ok(())
}
