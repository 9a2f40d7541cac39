//! Field extraction heuristics for bulletin lines
//!
//! Each heuristic is a small pure function over a line or token slice, so the
//! ad-hoc rules inherited from real bulletins can be unit-tested in
//! isolation. None of these ever fail a line on their own; callers decide
//! which fields are mandatory.

use crate::app::models::Category;
use crate::constants::{
    KEYWORD_TABLES, KILOMETER_SCALE_THRESHOLD, MAX_DISTANCE_METERS, MIN_DISTANCE_METERS,
    MIN_SPEED_M_PER_MIN,
};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// DD-MM-YY or DD/MM/YY date token
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{2})[-/](\d{2})[-/](\d{2})\b").expect("valid date regex"));

/// Complete ring number in one token: 2-letter federation code + 6-9 digits
static RING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}\d{6,9}$").expect("valid ring regex"));

/// Federation code alone, when the serial sits in the next token
static COUNTRY_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("valid country code regex"));

/// Ring serial alone
static RING_SERIAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6,9}$").expect("valid ring serial regex"));

/// Elapsed time as the timing systems print it: HH.MMSS with an optional
/// fractional second digit
static ELAPSED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})\.(\d{4,5})$").expect("valid elapsed time regex"));

/// Any decimal-looking token (speeds, coefficients)
static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+$").expect("valid decimal regex"));

// =============================================================================
// Dates
// =============================================================================

/// Find the first DD-MM-YY date token in a line and normalize it to a
/// calendar date. Two-digit years are assumed to be 20xx.
pub fn find_date(line: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(line)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(2000 + year, month, day)
}

/// Check whether a line contains a date-shaped token at all (classification
/// only; the token may still fail calendar validation)
pub fn has_date_token(line: &str) -> bool {
    DATE_RE.is_match(line)
}

// =============================================================================
// Category
// =============================================================================

/// Detect the race category from header text by case-insensitive substring
/// match against the per-language keyword tables.
///
/// The combined "oude & jaar" form is checked before the individual old and
/// yearling keywords it contains.
pub fn detect_category(line: &str) -> Category {
    let lower = line.to_lowercase();

    let has = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    let old = KEYWORD_TABLES.iter().any(|t| has(t.old));
    let yearling = KEYWORD_TABLES.iter().any(|t| has(t.yearling));
    let young = KEYWORD_TABLES.iter().any(|t| has(t.young));

    if old && yearling {
        Category::OldAndYearling
    } else if young {
        Category::Young
    } else if yearling {
        Category::Yearling
    } else if old {
        Category::Old
    } else {
        Category::Unknown
    }
}

// =============================================================================
// Field size and participants
// =============================================================================

/// Extract the declared field size: a 2-4 digit count immediately followed by
/// a category keyword ("357 Jongen") or a birds word ("412 duiven"), bounded
/// to the plausible range as a sanity filter.
pub fn extract_field_size(line: &str, min: u32, max: u32) -> Option<u32> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    for pair in tokens.windows(2) {
        let count = pair[0];
        if count.len() < 2 || count.len() > 4 || !count.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }

        let next = pair[1].to_lowercase();
        let is_count_marker = next.starts_with("duiven")
            || next.starts_with("pigeons")
            || crate::constants::contains_category_keyword(&next);
        if !is_count_marker {
            continue;
        }

        if let Ok(value) = count.parse::<u32>() {
            if (min..=max).contains(&value) {
                return Some(value);
            }
        }
    }

    None
}

/// Extract the participant count from a "Deelnemers:42"-style token
pub fn extract_participants(line: &str) -> Option<u32> {
    for token in line.split_whitespace() {
        for table in KEYWORD_TABLES {
            if let Some(rest) = token.strip_prefix(table.participants_marker) {
                if let Ok(value) = rest.parse::<u32>() {
                    return Some(value);
                }
            }
        }
    }
    None
}

// =============================================================================
// Unloading time and organizing body
// =============================================================================

/// Extract the unloading time from a "LOSTIJD:08:30"-style token, in any
/// supported language. Returns HH:MM.
pub fn extract_unloading_time(line: &str) -> Option<String> {
    for token in line.split_whitespace() {
        for table in KEYWORD_TABLES {
            let Some(rest) = token.strip_prefix(table.unloading_marker) else {
                continue;
            };

            let segments: Vec<&str> = rest.split(':').collect();
            if segments.len() >= 2
                && segments[0].len() == 2
                && segments[0].bytes().all(|b| b.is_ascii_digit())
                && segments[1].len() == 2
                && segments[1].bytes().all(|b| b.is_ascii_digit())
            {
                return Some(format!("{}:{}", segments[0], segments[1]));
            }
        }
    }
    None
}

/// Find an organizing-body line within a window of lines: the first line
/// containing a known organizational keyword, returned trimmed.
pub fn find_organizing_body<'a>(window: impl IntoIterator<Item = &'a str>) -> Option<String> {
    for line in window {
        if crate::constants::contains_organization_keyword(&line.to_uppercase()) {
            return Some(line.trim().to_string());
        }
    }
    None
}

// =============================================================================
// Race name
// =============================================================================

/// Extract the race name from a header line: the leading run of free-text
/// tokens before the first token containing a digit ("Mettet 20-08-25 ..."
/// yields "Mettet"). Returns None when the line opens with data tokens.
pub fn extract_race_name(line: &str) -> Option<String> {
    let mut name_tokens = Vec::new();

    for token in line.split_whitespace() {
        if token.bytes().any(|b| b.is_ascii_digit()) {
            break;
        }
        name_tokens.push(token);
    }

    if name_tokens.is_empty() {
        None
    } else {
        Some(name_tokens.join(" "))
    }
}

// =============================================================================
// Ring numbers
// =============================================================================

/// Locate a ring-number-shaped token sequence: either a single "BE1234567"
/// token or an adjacent "BE" + "1234567" pair.
///
/// Returns the token index where the ring starts, the number of tokens it
/// spans (1 or 2), and the normalized ring number. Rings from federations
/// that do not use a two-letter prefix are not recognized and their lines
/// are dropped at the gatekeeper.
pub fn find_ring_number(tokens: &[&str]) -> Option<(usize, usize, String)> {
    for (i, token) in tokens.iter().enumerate() {
        if RING_RE.is_match(token) {
            return Some((i, 1, normalize_ring_number(token)));
        }

        if COUNTRY_CODE_RE.is_match(token) {
            if let Some(next) = tokens.get(i + 1) {
                if RING_SERIAL_RE.is_match(next) {
                    let combined = format!("{}{}", token, next);
                    return Some((i, 2, normalize_ring_number(&combined)));
                }
            }
        }
    }
    None
}

/// Normalize a ring number: strip all whitespace and upper-case
pub fn normalize_ring_number(ring: &str) -> String {
    ring.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

// =============================================================================
// Distance, elapsed time, speed
// =============================================================================

/// Extract the flight distance in meters: the first 4-6 digit token in the
/// plausible meter range. A smaller all-digit token in kilometer scale is
/// kept as a fallback and scaled by 1000.
pub fn extract_distance(tokens: &[&str]) -> Option<u32> {
    let mut km_candidate = None;

    for token in tokens {
        if !token.bytes().all(|b| b.is_ascii_digit()) || token.is_empty() {
            continue;
        }
        let Ok(value) = token.parse::<u32>() else {
            continue;
        };

        if (4..=6).contains(&token.len())
            && (MIN_DISTANCE_METERS..=MAX_DISTANCE_METERS).contains(&value)
        {
            return Some(value);
        }

        if km_candidate.is_none()
            && value < KILOMETER_SCALE_THRESHOLD
            && (MIN_DISTANCE_METERS..=MAX_DISTANCE_METERS).contains(&(value * 1000))
        {
            km_candidate = Some(value * 1000);
        }
    }

    km_candidate
}

/// Reconstruct an elapsed-time clock string from a decimal HH.MMSS token
/// ("14.3012" becomes "14:30:12"); a fifth decimal digit is a fractional
/// second and is dropped.
pub fn extract_elapsed_time(tokens: &[&str]) -> Option<String> {
    for token in tokens {
        if let Some(caps) = ELAPSED_RE.captures(token) {
            let hours = &caps[1];
            let rest = &caps[2];
            return Some(format!("{}:{}:{}", hours, &rest[..2], &rest[2..4]));
        }
    }
    None
}

/// Extract the speed in meters/minute: the last decimal-looking token on the
/// line (speed is conventionally the rightmost computed column), subject to
/// a plausibility floor that rules out elapsed times and coefficients.
pub fn extract_speed(tokens: &[&str]) -> Option<f64> {
    tokens
        .iter()
        .rev()
        .filter(|t| DECIMAL_RE.is_match(t))
        .filter_map(|t| t.parse::<f64>().ok())
        .find(|&v| v >= MIN_SPEED_M_PER_MIN)
}

/// Check whether any token on the line is decimal-shaped (used by the
/// result-line predicate)
pub fn has_decimal_token(tokens: &[&str]) -> bool {
    tokens.iter().any(|t| DECIMAL_RE.is_match(t))
}

/// Check whether the token slice contains a ring-number-shaped sequence
pub fn has_ring_shaped_token(tokens: &[&str]) -> bool {
    find_ring_number(tokens).is_some()
}

// =============================================================================
// Coefficient
// =============================================================================

/// Standard pigeon-racing performance index:
/// `position * 100 / min(declared_field_size, cap)`, lower is better.
/// Always recomputed from the parsed position, never trusted from source.
pub fn compute_coefficient(position: u32, declared_field_size: u32, cap: u32) -> f64 {
    let denominator = declared_field_size.min(cap).max(1);
    (position as f64 * 100.0) / denominator as f64
}
