//! Utilities that are used across the `gbstat` subcommands.

pub mod artifact;
pub mod display;
