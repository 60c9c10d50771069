use clap::Parser;
use clap::Subcommand;
use git_testament::git_testament;
use git_testament::render_testament;

use gbstat::report;
use gbstat::scan;

git_testament!(TESTAMENT);

#[derive(Subcommand)]
pub enum Subcommands {
    /// Summarizes every GenBank file in a directory as a table and a chart.
    Report(report::command::ReportArgs),

    /// Counts the CDS annotations in a single GenBank file.
    Scan(scan::command::ScanArgs),
}

#[derive(Parser)]
#[command(author, version = render_testament!(TESTAMENT), propagate_version = true, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Subcommands,

    /// Only errors are printed to the stderr stream.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// All available information, including debug information, is printed
    /// to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::INFO
    };

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Subcommands::Report(args) => report::command::report(args),
        Subcommands::Scan(args) => scan::command::scan(args),
    }
}
