//! Data models for bulletin processing
//!
//! This module contains the core data structures for representing parsed
//! races and per-finisher results. The shapes match what the surrounding
//! record-keeping service persists; the parser only guarantees internal
//! consistency of one parse, never deduplication against history.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Race Category
// =============================================================================

/// Age category a race was flown in, detected from header keywords
///
/// Bulletins announce the category in the organizing body's language
/// ("jongen", "oude & jaar", "jeunes", ...). Detection is case-insensitive
/// substring matching against the keyword tables in [`crate::constants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Young birds (jongen / jeunes)
    Young,
    /// Old birds (oude / vieux)
    Old,
    /// Combined old and yearling race (oude & jaar)
    OldAndYearling,
    /// Yearlings only
    Yearling,
    /// No category keyword recognized
    Unknown,
}

impl Category {
    /// Human-readable label used in race names and reports
    pub fn label(&self) -> &'static str {
        match self {
            Category::Young => "Young",
            Category::Old => "Old",
            Category::OldAndYearling => "Old & Yearling",
            Category::Yearling => "Yearling",
            Category::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Race
// =============================================================================

/// One race section recovered from a bulletin
///
/// Created when a race-header line is recognized, immutable afterwards, and
/// emitted together with its results when the section closes. A race is only
/// ever emitted with at least one result attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    /// Generated identifier; results reference it via `race_id`
    pub id: Uuid,

    /// Free-text location/race identifier from the header line
    pub name: String,

    /// Race date, normalized to ISO from the bulletin's DD-MM-YY token
    pub date: NaiveDate,

    /// Age category detected from header keywords
    pub category: Category,

    /// Birds entered in this race as declared in the header; denominator
    /// (after capping) for every coefficient in the section
    pub declared_field_size: u32,

    /// Participating fanciers as declared (0 when the bulletin omits it)
    pub participants: u32,

    /// Organizing body, from a nearby organizational line or the default
    pub organizing_body: String,

    /// Release time of the birds (HH:MM)
    pub unloading_time: String,
}

impl Race {
    /// Create a new race with a generated id, validating field bounds
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        date: NaiveDate,
        category: Category,
        declared_field_size: u32,
        participants: u32,
        organizing_body: String,
        unloading_time: String,
    ) -> Result<Self> {
        let race = Self {
            id: Uuid::new_v4(),
            name,
            date,
            category,
            declared_field_size,
            participants,
            organizing_body,
            unloading_time,
        };

        race.validate()?;
        Ok(race)
    }

    /// Validate race data for consistency
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::data_validation(
                "Race name cannot be empty".to_string(),
            ));
        }

        if self.declared_field_size == 0 {
            return Err(Error::data_validation(
                "Declared field size must be greater than 0".to_string(),
            ));
        }

        if self.organizing_body.trim().is_empty() {
            return Err(Error::data_validation(
                "Organizing body cannot be empty".to_string(),
            ));
        }

        if self.unloading_time.trim().is_empty() {
            return Err(Error::data_validation(
                "Unloading time cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Race Result
// =============================================================================

/// One finisher's record within a race
///
/// Position and ring number are the load-bearing identity fields and are
/// mandatory at extraction time; everything else is best-effort enrichment
/// completed with documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    /// Generated identifier
    pub id: Uuid,

    /// Race this result belongs to; always present in the same parse output
    pub race_id: Uuid,

    /// 1-based finishing rank within the race
    pub position: u32,

    /// Normalized ring number: 2-letter federation code concatenated with a
    /// 6-9 digit serial, whitespace-stripped and upper-cased ("BE1234567").
    /// Join key to a registered bird.
    pub ring_number: String,

    /// Free text between the position and the ring number; an owner name in
    /// some source formats, the bird's name in others
    pub owner_or_name: String,

    /// Flight distance in meters
    pub distance_meters: u32,

    /// Elapsed time as a clock string, reconstructed from the bulletin's
    /// decimal HH.MMSS token when present
    pub elapsed_time: String,

    /// Speed in meters/minute, conventionally the last computed column
    pub speed: f64,

    /// Performance index: `position * 100 / min(declared_field_size, cap)`.
    /// Always recomputed, never trusted from source. Lower is better.
    pub coefficient: f64,
}

impl RaceResult {
    /// Create a new result with a generated id, validating identity fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        race_id: Uuid,
        position: u32,
        ring_number: String,
        owner_or_name: String,
        distance_meters: u32,
        elapsed_time: String,
        speed: f64,
        coefficient: f64,
    ) -> Result<Self> {
        let result = Self {
            id: Uuid::new_v4(),
            race_id,
            position,
            ring_number,
            owner_or_name,
            distance_meters,
            elapsed_time,
            speed,
            coefficient,
        };

        result.validate()?;
        Ok(result)
    }

    /// Validate result data for consistency
    pub fn validate(&self) -> Result<()> {
        if self.position == 0 {
            return Err(Error::data_validation(
                "Finishing position must be a positive integer".to_string(),
            ));
        }

        if !is_normalized_ring_number(&self.ring_number) {
            return Err(Error::data_validation(format!(
                "Ring number '{}' is not in normalized form (2 letters + 6-9 digits)",
                self.ring_number
            )));
        }

        if self.speed < 0.0 {
            return Err(Error::data_validation(format!(
                "Speed cannot be negative: {}",
                self.speed
            )));
        }

        if self.coefficient < 0.0 {
            return Err(Error::data_validation(format!(
                "Coefficient cannot be negative: {}",
                self.coefficient
            )));
        }

        Ok(())
    }
}

/// Check whether a string is a normalized ring number: exactly two ASCII
/// uppercase letters followed by 6-9 digits, no internal whitespace
pub fn is_normalized_ring_number(ring: &str) -> bool {
    let bytes = ring.as_bytes();
    if bytes.len() < 8 || bytes.len() > 11 {
        return false;
    }
    bytes[..2].iter().all(|b| b.is_ascii_uppercase())
        && bytes[2..].iter().all(|b| b.is_ascii_digit())
}
