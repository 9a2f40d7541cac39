//! Command-line argument definitions for the bulletin processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the bulletin processor
///
/// Parses pigeon racing result bulletins (Data Technology style TXT exports)
/// into structured race and result records ready for import into a
/// record-keeping service.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bulletin-processor",
    version,
    about = "Parse pigeon racing result bulletins into structured race and result records",
    long_about = "Parses the semi-structured, multi-language (Dutch/French) plain-text result \
                  bulletins produced by third-party timing systems. Recovers race metadata and \
                  per-finisher result records with best-effort heuristics, reports parse \
                  statistics, and exports clean batches for downstream storage."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the bulletin processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse one or more bulletin files (main command)
    Parse(ParseArgs),
    /// Inspect a ring roster file
    Rings(RingsArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Bulletin files or glob patterns to parse
    ///
    /// Each argument may be a file path or a glob pattern like
    /// 'uploads/*.txt'. Files are parsed independently in the order given.
    #[arg(
        value_name = "FILES",
        required = true,
        help = "Bulletin files or glob patterns to parse"
    )]
    pub inputs: Vec<String>,

    /// Ring roster file for link reporting
    ///
    /// Plain-text file with one ring number per line ('#' starts a comment).
    /// When given, the summary reports how many parsed results belong to a
    /// registered bird. Results are never filtered by registration.
    #[arg(
        short = 'r',
        long = "rings-file",
        value_name = "FILE",
        help = "Ring roster file for reporting linkable results"
    )]
    pub rings_file: Option<PathBuf>,

    /// Output file for parsed records (JSON)
    ///
    /// If not specified, records are only summarized on stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Write parsed races and results as JSON to this file"
    )]
    pub output_file: Option<PathBuf>,

    /// Output format for the summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the parse summary"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the rings command (roster inspection)
#[derive(Debug, Clone, Parser)]
pub struct RingsArgs {
    /// Ring roster file to inspect
    #[arg(value_name = "FILE", help = "Ring roster file to inspect")]
    pub rings_file: PathBuf,

    /// Output format for the roster report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the roster report"
    )]
    pub output_format: OutputFormat,

    /// Include the full ring listing in the report
    #[arg(long = "detailed", help = "Include full ring listing in report")]
    pub detailed: bool,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ParseArgs {
    /// Validate the parse command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(Error::configuration(
                "At least one bulletin file must be given".to_string(),
            ));
        }

        // Validate rings file exists if specified
        if let Some(rings_file) = &self.rings_file {
            if !rings_file.exists() {
                return Err(Error::configuration(format!(
                    "Rings file does not exist: {}",
                    rings_file.display()
                )));
            }
        }

        // Validate output file directory exists if specified
        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl RingsArgs {
    /// Validate the rings command arguments
    pub fn validate(&self) -> Result<()> {
        if !self.rings_file.exists() {
            return Err(Error::configuration(format!(
                "Rings file does not exist: {}",
                self.rings_file.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
