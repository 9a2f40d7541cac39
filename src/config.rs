//! Parser configuration and validation.
//!
//! Every fallback value the parser bakes in (field size 357, unloading time
//! "08:00", distance 85 000 m, ...) was calibrated against bulletins from a
//! single organizing body and may not generalize. This module routes all of
//! them through one configurable struct so other deployments can override
//! them without code changes.

use crate::constants::{
    DEFAULT_DISTANCE_METERS, DEFAULT_ELAPSED_TIME, DEFAULT_FIELD_SIZE, DEFAULT_ORGANIZING_BODY,
    DEFAULT_RACE_DATE, DEFAULT_SPEED_M_PER_MIN, DEFAULT_UNLOADING_TIME, FIELD_SIZE_CAP,
    HEADER_LOOKAHEAD_LINES, HEADER_LOOKBACK_LINES, MAX_FIELD_SIZE, MIN_FIELD_SIZE,
    MIN_RESULT_TOKENS,
};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tunable parameters for bulletin parsing
///
/// Defaults reproduce the behavior observed against Data Technology bulletins.
/// The struct is cheap to clone and each [`crate::BulletinParser`] owns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Declared field size fallback when no count is found near a header
    pub default_field_size: u32,

    /// Cap applied to the field size before computing coefficients
    pub field_size_cap: u32,

    /// Smallest count accepted as a declared field size
    pub min_field_size: u32,

    /// Largest count accepted as a declared field size
    pub max_field_size: u32,

    /// Unloading time fallback (HH:MM)
    pub default_unloading_time: String,

    /// Organizing body fallback
    pub default_organizing_body: String,

    /// Race date fallback (ISO format)
    pub default_race_date: NaiveDate,

    /// Distance fallback in meters
    pub default_distance_meters: u32,

    /// Elapsed time fallback (HH:MM:SS)
    pub default_elapsed_time: String,

    /// Speed fallback in meters/minute
    pub default_speed: f64,

    /// Minimum token count for a line to qualify as a result row
    pub min_result_tokens: usize,

    /// Lines scanned before a header line for race metadata
    pub header_lookback: usize,

    /// Lines scanned after a header line for race metadata
    pub header_lookahead: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_field_size: DEFAULT_FIELD_SIZE,
            field_size_cap: FIELD_SIZE_CAP,
            min_field_size: MIN_FIELD_SIZE,
            max_field_size: MAX_FIELD_SIZE,
            default_unloading_time: DEFAULT_UNLOADING_TIME.to_string(),
            default_organizing_body: DEFAULT_ORGANIZING_BODY.to_string(),
            default_race_date: NaiveDate::parse_from_str(DEFAULT_RACE_DATE, "%Y-%m-%d")
                .expect("default race date constant is valid ISO"),
            default_distance_meters: DEFAULT_DISTANCE_METERS,
            default_elapsed_time: DEFAULT_ELAPSED_TIME.to_string(),
            default_speed: DEFAULT_SPEED_M_PER_MIN,
            min_result_tokens: MIN_RESULT_TOKENS,
            header_lookback: HEADER_LOOKBACK_LINES,
            header_lookahead: HEADER_LOOKAHEAD_LINES,
        }
    }
}

impl ParserConfig {
    /// Create configuration with a custom default field size
    pub fn with_default_field_size(mut self, field_size: u32) -> Self {
        self.default_field_size = field_size;
        self
    }

    /// Create configuration with a custom default organizing body
    pub fn with_default_organizing_body(mut self, body: impl Into<String>) -> Self {
        self.default_organizing_body = body.into();
        self
    }

    /// Create configuration with a custom default unloading time
    pub fn with_default_unloading_time(mut self, time: impl Into<String>) -> Self {
        self.default_unloading_time = time.into();
        self
    }

    /// Create configuration with a custom default distance
    pub fn with_default_distance_meters(mut self, meters: u32) -> Self {
        self.default_distance_meters = meters;
        self
    }

    /// Create configuration with a custom header look-around window
    pub fn with_header_window(mut self, lookback: usize, lookahead: usize) -> Self {
        self.header_lookback = lookback;
        self.header_lookahead = lookahead;
        self
    }

    /// Validate configuration values for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.min_field_size == 0 {
            return Err(Error::configuration(
                "Minimum field size must be greater than 0".to_string(),
            ));
        }

        if self.min_field_size > self.max_field_size {
            return Err(Error::configuration(format!(
                "Minimum field size {} exceeds maximum {}",
                self.min_field_size, self.max_field_size
            )));
        }

        if !(self.min_field_size..=self.max_field_size).contains(&self.default_field_size) {
            return Err(Error::configuration(format!(
                "Default field size {} outside plausible range [{}, {}]",
                self.default_field_size, self.min_field_size, self.max_field_size
            )));
        }

        if self.field_size_cap == 0 {
            return Err(Error::configuration(
                "Field size cap must be greater than 0".to_string(),
            ));
        }

        if self.min_result_tokens < 3 {
            return Err(Error::configuration(
                "Result lines need at least position, name, and ring tokens".to_string(),
            ));
        }

        Ok(())
    }

    /// Field size actually used as the coefficient denominator
    pub fn effective_field_size(&self, declared: u32) -> u32 {
        declared.min(self.field_size_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ParserConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_field_size, 357);
        assert_eq!(config.default_unloading_time, "08:00");
    }

    #[test]
    fn test_builder_methods() {
        let config = ParserConfig::default()
            .with_default_field_size(500)
            .with_default_organizing_body("Union Colombophile")
            .with_header_window(2, 1);

        assert_eq!(config.default_field_size, 500);
        assert_eq!(config.default_organizing_body, "Union Colombophile");
        assert_eq!(config.header_lookback, 2);
        assert_eq!(config.header_lookahead, 1);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let mut config = ParserConfig::default();
        config.default_field_size = 5;
        assert!(config.validate().is_err());

        let mut config = ParserConfig::default();
        config.min_field_size = 0;
        assert!(config.validate().is_err());

        let mut config = ParserConfig::default();
        config.min_result_tokens = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_effective_field_size_cap() {
        let config = ParserConfig::default();
        assert_eq!(config.effective_field_size(357), 357);
        assert_eq!(config.effective_field_size(12000), 5000);
    }
}
