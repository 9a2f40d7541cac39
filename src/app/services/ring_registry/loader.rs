//! Ring roster loading
//!
//! The roster is a plain-text file with one ring number per line. Blank
//! lines and `#` comments are skipped; entries are normalized the same way
//! the parser normalizes rings so lookups match exactly.

use super::RingRegistry;
use crate::app::services::bulletin_parser::field_parsers::normalize_ring_number;
use crate::app::models::is_normalized_ring_number;
use crate::{Error, Result};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

impl RingRegistry {
    /// Load a ring roster from a plain-text file
    ///
    /// Entries that do not normalize to a valid ring shape are skipped with
    /// a warning rather than failing the load; a roster with typos should
    /// still serve the rings it does list.
    pub fn load(roster_path: &Path) -> Result<Self> {
        if !roster_path.exists() {
            return Err(Error::file_not_found(roster_path.display().to_string()));
        }

        let content = std::fs::read_to_string(roster_path).map_err(|e| {
            Error::ring_registry(format!(
                "Failed to read roster {}: {}",
                roster_path.display(),
                e
            ))
        })?;

        let mut registry = Self::new(roster_path.to_path_buf());

        for (line_number, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            registry.lines_read += 1;

            let normalized = normalize_ring_number(trimmed);
            if is_normalized_ring_number(&normalized) {
                registry.rings.insert(normalized);
            } else {
                warn!(
                    "Skipping malformed ring '{}' at {}:{}",
                    trimmed,
                    roster_path.display(),
                    line_number + 1
                );
            }
        }

        registry.load_time = Instant::now();

        info!(
            "Loaded {} rings from {} ({} roster lines)",
            registry.ring_count(),
            roster_path.display(),
            registry.lines_read
        );

        Ok(registry)
    }
}
