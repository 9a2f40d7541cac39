//! Ring registry service for O(1) known-ring lookups
//!
//! The surrounding record-keeping service keeps a roster of ring numbers for
//! the birds a breeder owns. This registry loads that roster and answers
//! membership queries so callers can report which parsed results are
//! linkable to an owned bird. The parser itself never filters by
//! registration; it emits every recognizable result.

use crate::app::models::RaceResult;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

pub mod loader;

#[cfg(test)]
pub mod tests;

/// Registry of known ring numbers with O(1) membership lookups
///
/// Ring numbers are stored in normalized form (upper-cased, no whitespace),
/// matching what the parser emits.
#[derive(Debug, Clone)]
pub struct RingRegistry {
    /// Normalized ring numbers indexed for O(1) lookups
    pub(crate) rings: HashSet<String>,

    /// Path the roster was loaded from
    pub(crate) source_path: PathBuf,

    /// Timestamp when the registry was loaded
    pub(crate) load_time: Instant,

    /// Lines read from the roster file before filtering
    pub(crate) lines_read: usize,
}

impl RingRegistry {
    /// Create a new empty registry
    pub fn new(source_path: PathBuf) -> Self {
        Self {
            rings: HashSet::new(),
            source_path,
            load_time: Instant::now(),
            lines_read: 0,
        }
    }

    /// Check whether a normalized ring number is registered (O(1))
    pub fn is_registered(&self, ring_number: &str) -> bool {
        self.rings.contains(ring_number)
    }

    /// Total number of registered rings
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Path the roster was loaded from
    pub fn source_path(&self) -> &PathBuf {
        &self.source_path
    }

    /// Lines read from the roster file before filtering
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Iterate over the registered rings in arbitrary order
    pub fn iter_rings(&self) -> impl Iterator<Item = &String> {
        self.rings.iter()
    }

    /// Count how many of the given results carry a registered ring number
    pub fn count_linkable(&self, results: &[RaceResult]) -> usize {
        results
            .iter()
            .filter(|r| self.is_registered(&r.ring_number))
            .count()
    }
}
