//! The summary table written by `gbstat report`.

use std::io;
use std::io::Write;
use std::path::Path;

use prettytable::row;
use prettytable::Table;
use serde::Serialize;

use crate::errors::BuildError;
use crate::report::collect::ReportTable;
use crate::utils::artifact::write_atomically;
use crate::utils::display::PercentageFormat;

/// Column names of the summary table, in order.
pub const COLUMNS: [&str; 6] = [
    "Genome",
    "CDS Count",
    "Product Count",
    "Gene Count",
    "Hypothetical Protein Count",
    "Non-Hypothetical Gene Count",
];

/// One row of the summary table as it is serialized.
#[derive(Serialize)]
struct TableRecord<'a> {
    genome: &'a str,
    cds_count: u64,
    product_count: u64,
    gene_count: u64,
    hypothetical_protein_count: u64,
    non_hypothetical_gene_count: u64,
}

/// Writes `table` as CSV to `writer`. The header row is always written, even
/// when the table has no rows.
pub fn write_csv<W>(table: &ReportTable, writer: W) -> csv::Result<()>
where
    W: Write,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(COLUMNS)?;

    for row in table.rows() {
        let r = &row.record;
        writer.serialize(TableRecord {
            genome: &row.genome_name,
            cds_count: r.cds_count,
            product_count: r.product_count,
            gene_count: r.gene_count,
            hypothetical_protein_count: r.hypothetical_protein_count,
            non_hypothetical_gene_count: r.non_hypothetical_gene_count,
        })?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes `table` as CSV to the file at `path`.
pub fn write<P>(table: &ReportTable, path: P) -> Result<(), BuildError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    write_atomically(path, |w| write_csv(table, w).map_err(io::Error::from)).map_err(
        |source| BuildError::TableWrite {
            path: path.to_path_buf(),
            source,
        },
    )
}

/// Builds a human readable version of `table` for printing to the terminal,
/// with a trailing row of totals.
pub fn to_pretty_table(table: &ReportTable) -> Table {
    let mut pretty = Table::new();

    pretty.add_row(row![
        COLUMNS[0],
        COLUMNS[1],
        COLUMNS[2],
        COLUMNS[3],
        COLUMNS[4],
        COLUMNS[5],
        "Hypothetical %"
    ]);

    for row in table.rows() {
        let r = &row.record;
        pretty.add_row(row![
            row.genome_name,
            r.cds_count,
            r.product_count,
            r.gene_count,
            r.hypothetical_protein_count,
            r.non_hypothetical_gene_count,
            PercentageFormat(r.hypothetical_protein_count, r.product_count),
        ]);
    }

    let t = table.totals();
    pretty.add_row(row![
        "Total",
        t.cds_count,
        t.product_count,
        t.gene_count,
        t.hypothetical_protein_count,
        t.non_hypothetical_gene_count,
        PercentageFormat(t.hypothetical_protein_count, t.product_count),
    ]);

    pretty
}
