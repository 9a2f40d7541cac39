//! Shared components for CLI commands
//!
//! Common summary types, logging setup, and report formatting used across
//! the command implementations.

use crate::Result;
use colored::Colorize;
use tracing::debug;

/// Aggregated statistics reported after a command run
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct RunSummary {
    /// Number of bulletin files processed
    pub files_processed: usize,
    /// Races recovered across all files
    pub races_parsed: usize,
    /// Results recovered across all files
    pub results_parsed: usize,
    /// Result-shaped lines rejected across all files
    pub results_rejected: usize,
    /// Race sections dropped for holding zero results
    pub races_dropped_empty: usize,
    /// Files that yielded zero results (flagged for manual review)
    pub empty_files: Vec<String>,
    /// Results linkable to a registered ring, when a roster was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results_linkable: Option<usize>,
}

impl RunSummary {
    /// Print a colored human-readable summary to stdout
    pub fn print_human(&self) {
        println!();
        println!("{}", "Parse Summary".bold());
        println!("  Files processed:  {}", self.files_processed);
        println!(
            "  Races parsed:     {}",
            self.races_parsed.to_string().green()
        );
        println!(
            "  Results parsed:   {}",
            self.results_parsed.to_string().green()
        );

        if self.results_rejected > 0 {
            println!(
                "  Results rejected: {}",
                self.results_rejected.to_string().yellow()
            );
        }

        if self.races_dropped_empty > 0 {
            println!(
                "  Empty races dropped: {}",
                self.races_dropped_empty.to_string().yellow()
            );
        }

        if let Some(linkable) = self.results_linkable {
            println!("  Linkable to owned birds: {}", linkable.to_string().cyan());
        }

        for file in &self.empty_files {
            println!(
                "  {} {} yielded zero results; review manually",
                "warning:".yellow().bold(),
                file
            );
        }
    }
}

/// Set up structured logging from a command's log level
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bulletin_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
