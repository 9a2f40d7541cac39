//! Parse command implementation
//!
//! Expands the input patterns, parses each bulletin file, aggregates the
//! per-file outcomes into a run summary, and optionally exports the parsed
//! batches as JSON.

use crate::app::services::ring_registry::RingRegistry;
use crate::app::services::sink::{JsonFileSink, ResultSink};
use crate::app::models::{Race, RaceResult};
use crate::cli::args::{OutputFormat, ParseArgs};
use crate::{BulletinParser, Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::{info, warn};

use super::shared::{RunSummary, setup_logging};

/// Run the parse command
pub fn run_parse(args: ParseArgs) -> Result<RunSummary> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let files = expand_inputs(&args.inputs)?;
    info!("Parsing {} bulletin file(s)", files.len());

    let registry = match &args.rings_file {
        Some(path) => Some(RingRegistry::load(path)?),
        None => None,
    };

    let parser = BulletinParser::new();
    let mut summary = RunSummary::default();
    let mut all_races: Vec<Race> = Vec::new();
    let mut all_results: Vec<RaceResult> = Vec::new();

    let progress = make_progress_bar(&args, files.len());

    for file in &files {
        if let Some(bar) = &progress {
            bar.set_message(file.display().to_string());
        }

        let outcome = parser.parse_file(file)?;

        summary.files_processed += 1;
        summary.races_parsed += outcome.stats.races_parsed;
        summary.results_parsed += outcome.stats.results_parsed;
        summary.results_rejected += outcome.stats.results_rejected;
        summary.races_dropped_empty += outcome.stats.races_dropped_empty;

        if outcome.is_empty() {
            warn!("{} yielded zero results", file.display());
            summary.empty_files.push(file.display().to_string());
        }

        all_races.extend(outcome.races);
        all_results.extend(outcome.results);

        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }

    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    if let Some(registry) = &registry {
        summary.results_linkable = Some(registry.count_linkable(&all_results));
    }

    if let Some(output_file) = &args.output_file {
        let mut sink = JsonFileSink::new(output_file);
        sink.store_batch(&all_races, &all_results)?;
    }

    match args.output_format {
        OutputFormat::Human => {
            if !args.quiet {
                summary.print_human();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(summary)
}

/// Expand file paths and glob patterns into a concrete file list
fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = PathBuf::from(input);
        if path.is_file() {
            files.push(path);
            continue;
        }

        let matches: Vec<PathBuf> = glob::glob(input)
            .map_err(|e| Error::invalid_pattern(input.clone(), e.to_string()))?
            .filter_map(|entry| entry.ok())
            .filter(|p| p.is_file())
            .collect();

        if matches.is_empty() {
            return Err(Error::file_not_found(input.clone()));
        }

        files.extend(matches);
    }

    Ok(files)
}

/// Progress bar over multiple input files; suppressed in quiet mode and for
/// single files
fn make_progress_bar(args: &ParseArgs, file_count: usize) -> Option<ProgressBar> {
    if !args.show_progress() || file_count < 2 {
        return None;
    }

    let bar = ProgressBar::new(file_count as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .expect("valid progress template"),
    );
    Some(bar)
}
