//! Application constants for the bulletin processor
//!
//! This module contains the documented default values, plausibility bounds,
//! and language keyword tables used throughout bulletin parsing. Every
//! default here was observed in real Data Technology bulletins from one
//! organizing body; deployments against other bodies override them through
//! [`crate::config::ParserConfig`].

// =============================================================================
// Field Defaults
// =============================================================================

/// Declared field size used when no plausible count is found near a race header
pub const DEFAULT_FIELD_SIZE: u32 = 357;

/// Maximum field size used as the coefficient denominator cap
pub const FIELD_SIZE_CAP: u32 = 5000;

/// Plausible range for a declared field size ([min, max], inclusive)
pub const MIN_FIELD_SIZE: u32 = 10;
pub const MAX_FIELD_SIZE: u32 = 5000;

/// Unloading time used when no LOSTIJD/LACHER marker is present
pub const DEFAULT_UNLOADING_TIME: &str = "08:00";

/// Organizing body used when no organizational keyword line is found nearby
pub const DEFAULT_ORGANIZING_BODY: &str = "Racing Federation";

/// Race date used when no date token can be resolved (fixed, never "today",
/// so that repeated parses of the same document stay identical)
pub const DEFAULT_RACE_DATE: &str = "2025-01-01";

/// Sentinel prefix for races whose name cannot be resolved
pub const UNKNOWN_RACE_NAME: &str = "Unknown Race";

/// Distance in meters used when no plausible distance token is present
pub const DEFAULT_DISTANCE_METERS: u32 = 85_000;

/// Elapsed time string used when no HH.MMSS token is present
pub const DEFAULT_ELAPSED_TIME: &str = "14:00:00";

/// Speed in meters/minute used when no plausible speed token is present
pub const DEFAULT_SPEED_M_PER_MIN: f64 = 1000.0;

// =============================================================================
// Plausibility Bounds
// =============================================================================

/// Plausible race distance range in meters (10 km to 1000 km)
pub const MIN_DISTANCE_METERS: u32 = 10_000;
pub const MAX_DISTANCE_METERS: u32 = 1_000_000;

/// Minimum plausible speed in meters/minute; decimal tokens below this are
/// coefficients or times, not speeds
pub const MIN_SPEED_M_PER_MIN: f64 = 100.0;

/// Distances below this are kilometer-scale and get scaled to meters
pub const KILOMETER_SCALE_THRESHOLD: u32 = 1000;

// =============================================================================
// Line Shape Thresholds
// =============================================================================

/// Minimum whitespace-separated tokens for a line to qualify as a result row
pub const MIN_RESULT_TOKENS: usize = 6;

/// Look-around window for race header extraction: real bulletins spread race
/// metadata across 2-3 adjacent lines
pub const HEADER_LOOKBACK_LINES: usize = 5;
pub const HEADER_LOOKAHEAD_LINES: usize = 3;

/// Minimum run of dashes/equals signs for a line to count as a separator
pub const MIN_SEPARATOR_RUN: usize = 4;

/// Maximum rejected-line samples retained in parse statistics
pub const MAX_REJECTED_SAMPLES: usize = 20;

// =============================================================================
// Language Keyword Tables
// =============================================================================

/// Keyword set for one supported bulletin language
///
/// Timing systems emit bulletins in the language of the organizing body;
/// Belgian files mix Dutch and French. New source-format variants are added
/// as rows here, never as scattered inline literals.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    /// Language tag for diagnostics
    pub language: &'static str,

    /// Column header words (uppercase), e.g. the "NR NAAM RING ..." row
    pub column_headers: &'static [&'static str],

    /// Substrings (lowercase) marking the young-bird category
    pub young: &'static [&'static str],

    /// Substrings (lowercase) marking the old-bird category
    pub old: &'static [&'static str],

    /// Substrings (lowercase) marking yearlings
    pub yearling: &'static [&'static str],

    /// Substrings (uppercase) identifying organizing-body lines
    pub organizations: &'static [&'static str],

    /// Marker token prefixing the unloading time, e.g. "LOSTIJD:08:30"
    pub unloading_marker: &'static str,

    /// Token prefixing the participant count, e.g. "Deelnemers:42"
    pub participants_marker: &'static str,
}

/// Supported bulletin languages
pub const KEYWORD_TABLES: &[KeywordTable] = &[
    KeywordTable {
        language: "nl",
        column_headers: &["NR", "NAAM", "RING", "AFSTAND", "TIJD", "SNELH"],
        young: &["jongen", "jonge"],
        old: &["oude", "oud"],
        yearling: &["jaar", "jaarse", "jaarduiven"],
        organizations: &["FEDERATIE", "BOND", "CLUB", "VERENIGING"],
        unloading_marker: "LOSTIJD:",
        participants_marker: "Deelnemers:",
    },
    KeywordTable {
        language: "fr",
        column_headers: &["NOM", "BAGUE", "DISTANCE", "TEMPS", "VITESSE"],
        young: &["jeunes"],
        old: &["vieux"],
        yearling: &["yearlings"],
        organizations: &["FEDERATION", "UNION", "SOCIETE"],
        unloading_marker: "LACHER:",
        participants_marker: "Participants:",
    },
];

/// Substrings identifying organization banner lines that close the current
/// race section (timing-vendor letterheads interleaved between races)
pub const BANNER_MARKERS: &[&str] = &["Data Technology"];

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether an uppercased line contains any column-header keyword
/// from any supported language
pub fn contains_column_header_keyword(upper_line: &str) -> bool {
    KEYWORD_TABLES.iter().any(|table| {
        table
            .column_headers
            .iter()
            .any(|keyword| upper_line.contains(keyword))
    })
}

/// Check whether an uppercased line contains any organizing-body keyword
pub fn contains_organization_keyword(upper_line: &str) -> bool {
    KEYWORD_TABLES.iter().any(|table| {
        table
            .organizations
            .iter()
            .any(|keyword| upper_line.contains(keyword))
    })
}

/// Check whether a lowercased line contains any category keyword in any
/// supported language
pub fn contains_category_keyword(lower_line: &str) -> bool {
    KEYWORD_TABLES.iter().any(|table| {
        table
            .young
            .iter()
            .chain(table.old)
            .chain(table.yearling)
            .any(|keyword| lower_line.contains(keyword))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_header_keywords_both_languages() {
        assert!(contains_column_header_keyword(
            "NR NAAM RING AFSTAND TIJD SNELHEID"
        ));
        assert!(contains_column_header_keyword("NO NOM BAGUE VITESSE"));
        assert!(!contains_column_header_keyword("METTET 20-08-25"));
    }

    #[test]
    fn test_organization_keywords() {
        assert!(contains_organization_keyword("KONINKLIJKE FEDERATIE WEST"));
        assert!(contains_organization_keyword("UNION COLOMBOPHILE"));
        assert!(!contains_organization_keyword("1 PEETERS BE1234567"));
    }

    #[test]
    fn test_category_keywords() {
        assert!(contains_category_keyword("357 jongen"));
        assert!(contains_category_keyword("oude & jaar"));
        assert!(contains_category_keyword("210 jeunes"));
        assert!(!contains_category_keyword("mettet 20-08-25"));
    }

    #[test]
    fn test_bounds_are_consistent() {
        assert!(MIN_FIELD_SIZE < MAX_FIELD_SIZE);
        assert_eq!(MAX_FIELD_SIZE, FIELD_SIZE_CAP);
        assert!(MIN_DISTANCE_METERS < MAX_DISTANCE_METERS);
        assert!((MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&DEFAULT_FIELD_SIZE));
        assert!((MIN_DISTANCE_METERS..=MAX_DISTANCE_METERS).contains(&DEFAULT_DISTANCE_METERS));
    }
}
