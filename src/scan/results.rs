//! Results produced by scanning a single GenBank file.

use std::ops::AddAssign;

use serde::Serialize;

/// The counts accumulated over one pass of a GenBank file.
///
/// Every product annotation lands in exactly one of the hypothetical or
/// non-hypothetical buckets, so `product_count` always equals their sum.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CountRecord {
    /// Number of `CDS` feature lines encountered.
    pub cds_count: u64,

    /// Number of CDS blocks carrying a `product=` qualifier. At most one per
    /// CDS block.
    pub product_count: u64,

    /// Number of `gene=` qualifier lines inside CDS blocks. Not deduplicated
    /// per CDS.
    pub gene_count: u64,

    /// Number of products annotated as `hypothetical protein`.
    pub hypothetical_protein_count: u64,

    /// Number of products annotated with anything else.
    pub non_hypothetical_gene_count: u64,
}

impl AddAssign for CountRecord {
    fn add_assign(&mut self, rhs: Self) {
        self.cds_count += rhs.cds_count;
        self.product_count += rhs.product_count;
        self.gene_count += rhs.gene_count;
        self.hypothetical_protein_count += rhs.hypothetical_protein_count;
        self.non_hypothetical_gene_count += rhs.non_hypothetical_gene_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assign_sums_every_field() {
        let mut total = CountRecord {
            cds_count: 2,
            product_count: 1,
            gene_count: 3,
            hypothetical_protein_count: 1,
            non_hypothetical_gene_count: 0,
        };
        total += CountRecord {
            cds_count: 5,
            product_count: 4,
            gene_count: 1,
            hypothetical_protein_count: 2,
            non_hypothetical_gene_count: 2,
        };

        assert_eq!(
            total,
            CountRecord {
                cds_count: 7,
                product_count: 5,
                gene_count: 4,
                hypothetical_protein_count: 3,
                non_hypothetical_gene_count: 2,
            }
        );
    }
}
