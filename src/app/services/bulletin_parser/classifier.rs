//! Line classification for bulletin documents
//!
//! Decides, for each line of a bulletin, whether it is noise, an
//! organization banner, a race header, a column header, or a candidate
//! result row. Classification is purely lexical; attaching result rows to
//! races is the state machine's job.

use super::field_parsers::{has_date_token, has_decimal_token, has_ring_shaped_token};
use crate::config::ParserConfig;
use crate::constants::{
    BANNER_MARKERS, MIN_SEPARATOR_RUN, contains_category_keyword, contains_column_header_keyword,
};

/// Lexical class of one bulletin line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Empty or whitespace-only line
    Blank,
    /// Run of dashes/equals signs between sections
    Separator,
    /// Timing-vendor letterhead; closes the current race section
    Banner,
    /// Announces a new race: date token co-occurring with a category keyword
    RaceHeader,
    /// Table header row ("NR NAAM RING ..."), skipped without state change
    ColumnHeader,
    /// Shaped like a finisher's row; extraction may still reject it
    ResultCandidate,
    /// Anything else; skipped
    Other,
}

/// Classify a single (pre-trimmed) bulletin line.
///
/// The result-row predicate is tested before the column-header keyword
/// check: a numeric result line must never be misclassified as a header
/// merely for containing a header substring (owner names and ring codes
/// routinely do).
pub fn classify(line: &str, config: &ParserConfig) -> LineClass {
    if line.is_empty() {
        return LineClass::Blank;
    }

    if is_separator(line) {
        return LineClass::Separator;
    }

    if is_banner(line) {
        return LineClass::Banner;
    }

    if is_race_header(line) {
        return LineClass::RaceHeader;
    }

    if is_result_shaped(line, config) {
        return LineClass::ResultCandidate;
    }

    if contains_column_header_keyword(&line.to_uppercase()) {
        return LineClass::ColumnHeader;
    }

    LineClass::Other
}

/// Pure separator line: a run of dashes or equals signs
fn is_separator(line: &str) -> bool {
    line.len() >= MIN_SEPARATOR_RUN && line.bytes().all(|b| b == b'-' || b == b'=')
}

/// Organization banner line (timing-vendor letterhead)
fn is_banner(line: &str) -> bool {
    BANNER_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Race header: a DD-MM-YY date token and a category keyword on one line
fn is_race_header(line: &str) -> bool {
    has_date_token(line) && contains_category_keyword(&line.to_lowercase())
}

/// Result-row predicate: leading positive integer, a minimum token count,
/// and at least one ring-number-shaped or decimal-looking token
pub fn is_result_shaped(line: &str, config: &ParserConfig) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() < config.min_result_tokens {
        return false;
    }

    let leading_position = tokens[0]
        .parse::<u32>()
        .map(|position| position > 0)
        .unwrap_or(false);
    if !leading_position {
        return false;
    }

    has_ring_shaped_token(&tokens[1..]) || has_decimal_token(&tokens[1..])
}
