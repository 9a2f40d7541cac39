//! Result row extraction from bulletin data lines
//!
//! Position and ring number are the load-bearing identity fields: a line
//! missing either yields no record at all (never a partial/orphan result).
//! Every other field degrades to its documented default, because secondary
//! columns vary across timing-system versions.

use super::field_parsers::{
    compute_coefficient, extract_distance, extract_elapsed_time, extract_speed, find_ring_number,
};
use crate::app::models::{Race, RaceResult};
use crate::config::ParserConfig;
use tracing::debug;

/// Owner/name placeholder when no free text sits between position and ring
const UNKNOWN_OWNER: &str = "Unknown";

/// Extract one result record from a data line against the active race.
///
/// Returns None when the line fails validation: no leading positive integer,
/// too few tokens, or no recognizable ring number.
pub fn extract_result(line: &str, race: &Race, config: &ParserConfig) -> Option<RaceResult> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens.len() < config.min_result_tokens {
        return None;
    }

    // Gatekeeper 1: leading 1-based finishing position
    let position: u32 = tokens[0].parse().ok().filter(|&p| p > 0)?;

    // Gatekeeper 2: ring-number-shaped token(s) somewhere after the position
    let rest = &tokens[1..];
    let Some((ring_offset, ring_span, ring_number)) = find_ring_number(rest) else {
        debug!("No ring number found in result line: {}", truncate(line, 80));
        return None;
    };

    // Free text between position and ring is the owner or bird name,
    // depending on the source format
    let owner_or_name = if ring_offset > 0 {
        rest[..ring_offset].join(" ").replace('-', " ")
    } else {
        UNKNOWN_OWNER.to_string()
    };

    // Everything after the ring is best-effort enrichment
    let trailing = &rest[ring_offset + ring_span..];

    let distance_meters =
        extract_distance(trailing).unwrap_or(config.default_distance_meters);

    let elapsed_time =
        extract_elapsed_time(trailing).unwrap_or_else(|| config.default_elapsed_time.clone());

    let speed = extract_speed(trailing).unwrap_or(config.default_speed);

    let coefficient =
        compute_coefficient(position, race.declared_field_size, config.field_size_cap);

    match RaceResult::new(
        race.id,
        position,
        ring_number,
        owner_or_name,
        distance_meters,
        elapsed_time,
        speed,
        coefficient,
    ) {
        Ok(result) => Some(result),
        Err(e) => {
            debug!("Rejected result line '{}': {}", truncate(line, 80), e);
            None
        }
    }
}

fn truncate(line: &str, max: usize) -> &str {
    match line.char_indices().nth(max) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
