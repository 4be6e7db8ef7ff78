//! CLI module
//!
//! Command-line interface for shipping CSV files to Log Analytics.

mod commands;
mod runner;

pub use commands::{Cli, USAGE};
pub use runner::Runner;
