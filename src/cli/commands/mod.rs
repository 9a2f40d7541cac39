//! Command implementations for the bulletin processor CLI
//!
//! This module contains the command execution logic, summary reporting, and
//! logging setup for the CLI interface. Each command is implemented in its
//! own module.

pub mod parse;
pub mod rings;
pub mod shared;

pub use shared::RunSummary;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the bulletin processor
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `parse`: bulletin parsing with summary and optional JSON export
/// - `rings`: ring roster inspection
pub fn run(args: Args) -> Result<RunSummary> {
    match args.get_command() {
        Commands::Parse(parse_args) => parse::run_parse(parse_args),
        Commands::Rings(rings_args) => rings::run_rings(rings_args),
    }
}
