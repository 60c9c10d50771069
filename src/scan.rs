//! Functionality related to the `gbstat scan` subcommand and the annotation
//! scanner shared with `gbstat report`.

pub mod command;
pub mod compute;
pub mod results;
