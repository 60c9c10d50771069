//! `gbstat` is a command line tool that summarizes the coding sequence (CDS)
//! annotations found in GenBank flat files. This package is composed of both
//! a library crate, as well as a binary crate.
//!
//! The library exposes the two halves of the tool:
//!
//! * [`scan`], a single-pass line scanner that counts CDS features, their
//!   product and gene qualifiers, and how many products are hypothetical;
//! * [`report`], which scans a whole directory of `.gbk` files and writes a
//!   CSV table and an SVG stacked bar chart summarizing every genome.
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]

pub mod errors;
pub mod report;
pub mod scan;
pub mod utils;
