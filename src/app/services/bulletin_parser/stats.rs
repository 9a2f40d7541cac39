//! Parse outcome and statistics for bulletin processing
//!
//! The races/results counts are the caller-visible success signal: a
//! bulletin that yields zero results is not an error, but callers should
//! surface it for manual review.

use crate::app::models::{Race, RaceResult};
use crate::constants::MAX_REJECTED_SAMPLES;

/// Complete output of one bulletin parse
///
/// Both lists follow document order of first appearance, and every result's
/// `race_id` refers to a race present in `races` (no dangling references).
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Races recovered from the document, each with at least one result
    pub races: Vec<Race>,

    /// Result records, in document order
    pub results: Vec<RaceResult>,

    /// Line-level parsing statistics
    pub stats: ParseStats,
}

impl ParseOutcome {
    /// True when the document produced no races at all (warning-worthy for
    /// callers, not an error)
    pub fn is_empty(&self) -> bool {
        self.races.is_empty()
    }
}

/// Line-level statistics for one parse
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total lines in the document
    pub total_lines: usize,

    /// Blank, separator, and unrecognized lines skipped
    pub noise_lines: usize,

    /// Organization banner lines seen
    pub banner_lines: usize,

    /// Column-header rows skipped
    pub column_header_lines: usize,

    /// Result-shaped lines seen before any race header (discarded)
    pub orphan_result_lines: usize,

    /// Result rows successfully extracted
    pub results_parsed: usize,

    /// Result-shaped lines that failed extraction (no ring number etc.)
    pub results_rejected: usize,

    /// Races emitted with at least one result
    pub races_parsed: usize,

    /// Race sections dropped because they held zero results
    pub races_dropped_empty: usize,

    /// Bounded sample of rejected lines for diagnostics
    pub rejected_samples: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejected result-shaped line, keeping a bounded sample
    pub fn record_rejected(&mut self, line: &str) {
        self.results_rejected += 1;
        if self.rejected_samples.len() < MAX_REJECTED_SAMPLES {
            self.rejected_samples.push(line.to_string());
        }
    }

    /// Fraction of result-shaped lines that produced a record, as a
    /// percentage
    pub fn result_success_rate(&self) -> f64 {
        let attempted = self.results_parsed + self.results_rejected;
        if attempted == 0 {
            0.0
        } else {
            (self.results_parsed as f64 / attempted as f64) * 100.0
        }
    }

    /// True when at least one result was recovered
    pub fn has_results(&self) -> bool {
        self.results_parsed > 0
    }
}
