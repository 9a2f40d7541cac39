//! Persistence collaborator interface
//!
//! The real store lives in the surrounding service and performs its own
//! deduplication against previously persisted results; this crate only hands
//! it internally consistent batches. [`ResultSink`] is the seam, and
//! [`JsonFileSink`] is the file-based implementation the CLI uses for
//! exports.

use crate::app::models::{Race, RaceResult};
use crate::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Receipt returned by a sink after accepting a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreReceipt {
    /// Races accepted in this batch
    pub races_stored: usize,
    /// Results accepted in this batch
    pub results_stored: usize,
}

/// Destination for parsed `(races, results)` batches
///
/// Implementations may deduplicate, reorder, or reject on their own policy;
/// the parser guarantees only that every result in a batch references a race
/// in the same batch.
pub trait ResultSink {
    /// Store one parsed batch
    fn store_batch(&mut self, races: &[Race], results: &[RaceResult]) -> Result<StoreReceipt>;
}

/// Serialized shape of an exported batch
#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    races: &'a [Race],
    results: &'a [RaceResult],
}

/// Sink that writes batches as pretty-printed JSON files
///
/// Each batch overwrites the target file; this is an export format for
/// inspection and downstream import, not an append-only store.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    output_path: PathBuf,
}

impl JsonFileSink {
    /// Create a sink writing to the given path
    pub fn new(output_path: &Path) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
        }
    }
}

impl ResultSink for JsonFileSink {
    fn store_batch(&mut self, races: &[Race], results: &[RaceResult]) -> Result<StoreReceipt> {
        let document = ExportDocument { races, results };

        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(&self.output_path, json).map_err(|e| {
            Error::export(format!(
                "Failed to write {}: {}",
                self.output_path.display(),
                e
            ))
        })?;

        info!(
            "Exported {} races and {} results to {}",
            races.len(),
            results.len(),
            self.output_path.display()
        );

        Ok(StoreReceipt {
            races_stored: races.len(),
            results_stored: results.len(),
        })
    }
}
