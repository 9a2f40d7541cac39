//! Race header extraction from bulletin header zones
//!
//! Real-world bulletins distribute race metadata across 2-3 adjacent lines,
//! so extraction works over a bounded look-around window centered on the
//! recognized header line. Every field that cannot be resolved falls back to
//! its documented default; a recognized header never aborts the parse.

use super::field_parsers::{
    detect_category, extract_field_size, extract_participants, extract_race_name,
    extract_unloading_time, find_date, find_organizing_body,
};
use crate::app::models::Race;
use crate::config::ParserConfig;
use crate::constants::UNKNOWN_RACE_NAME;
use tracing::debug;

/// Extract a race record from the header line at `index`, consulting the
/// configured window of neighboring lines for fields the header line itself
/// does not carry.
pub fn extract_race(lines: &[&str], index: usize, config: &ParserConfig) -> Option<Race> {
    let header_line = lines[index];

    let window_start = index.saturating_sub(config.header_lookback);
    let window_end = (index + config.header_lookahead + 1).min(lines.len());
    let window = &lines[window_start..window_end];

    let category = detect_category(header_line);

    let name = extract_race_name(header_line)
        .unwrap_or_else(|| format!("{} ({})", UNKNOWN_RACE_NAME, category.label()));

    let date = find_date(header_line)
        .or_else(|| window.iter().find_map(|line| find_date(line)))
        .unwrap_or(config.default_race_date);

    let declared_field_size =
        extract_field_size(header_line, config.min_field_size, config.max_field_size)
            .or_else(|| {
                window.iter().find_map(|line| {
                    extract_field_size(line, config.min_field_size, config.max_field_size)
                })
            })
            .unwrap_or(config.default_field_size);

    let participants = extract_participants(header_line).unwrap_or(0);

    let unloading_time = extract_unloading_time(header_line)
        .or_else(|| window.iter().find_map(|line| extract_unloading_time(line)))
        .unwrap_or_else(|| config.default_unloading_time.clone());

    let organizing_body = find_organizing_body(window.iter().copied())
        .unwrap_or_else(|| config.default_organizing_body.clone());

    match Race::new(
        name,
        date,
        category,
        declared_field_size,
        participants,
        organizing_body,
        unloading_time,
    ) {
        Ok(race) => {
            debug!(
                "Recognized race '{}' on {} ({}, field size {})",
                race.name, race.date, race.category, race.declared_field_size
            );
            Some(race)
        }
        Err(e) => {
            debug!("Rejected race header '{}': {}", header_line, e);
            None
        }
    }
}
