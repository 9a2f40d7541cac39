//! Core bulletin parser implementation
//!
//! This module provides the main parser orchestration: input decoding, the
//! single-pass line loop driving the state machine, and assembly of the
//! final `(races, results)` output.
//!
//! The parse is a pure synchronous transformation with no I/O after the
//! buffer is read; the whole document and its derived records are held in
//! memory, which is fine for upload-sized bulletins but makes this component
//! unsuitable for multi-megabyte or streaming inputs.

use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info, warn};

use super::classifier::{LineClass, classify};
use super::race_header::extract_race;
use super::result_line::extract_result;
use super::state::{LineEvent, ParseState, RaceSection};
use super::stats::{ParseOutcome, ParseStats};
use crate::app::models::{Race, RaceResult};
use crate::config::ParserConfig;
use crate::{Error, Result};

/// Parser for pigeon racing result bulletins
///
/// Stateless between calls: each invocation owns its own cursor and
/// accumulators, so one parser can serve concurrent uploads from separate
/// threads.
#[derive(Debug, Clone, Default)]
pub struct BulletinParser {
    config: ParserConfig,
}

impl BulletinParser {
    /// Create a parser with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration this parser runs with
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a bulletin file from disk
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseOutcome> {
        info!("Parsing bulletin file: {}", file_path.display());

        let bytes = std::fs::read(file_path).map_err(|e| {
            Error::io(
                format!("Failed to read file {}", file_path.display()),
                e,
            )
        })?;

        self.parse_bytes(&bytes, &file_path.display().to_string())
    }

    /// Parse a raw upload buffer, attempting UTF-8 first and falling back to
    /// Latin-1. The only unrecoverable input is a buffer that is not text at
    /// all (interior NUL bytes).
    pub fn parse_bytes(&self, bytes: &[u8], source_name: &str) -> Result<ParseOutcome> {
        let content = decode_buffer(bytes, source_name)?;
        Ok(self.parse_text(&content))
    }

    /// Parse decoded bulletin text.
    ///
    /// Never fails on malformed content: unrecognizable lines are skipped,
    /// missing secondary fields are defaulted, and a document with zero
    /// recognizable headers yields empty output.
    pub fn parse_text(&self, content: &str) -> ParseOutcome {
        let lines: Vec<&str> = content.lines().map(str::trim).collect();

        let mut stats = ParseStats::new();
        stats.total_lines = lines.len();

        let mut races: Vec<Race> = Vec::new();
        let mut results: Vec<RaceResult> = Vec::new();
        let mut state = ParseState::new();

        for (index, line) in lines.iter().enumerate() {
            let event = match classify(line, &self.config) {
                LineClass::Blank | LineClass::Separator | LineClass::Other => {
                    stats.noise_lines += 1;
                    LineEvent::Noise
                }

                LineClass::Banner => {
                    stats.banner_lines += 1;
                    LineEvent::Banner
                }

                LineClass::ColumnHeader => {
                    stats.column_header_lines += 1;
                    LineEvent::ColumnHeader
                }

                LineClass::RaceHeader => match extract_race(&lines, index, &self.config) {
                    Some(race) => LineEvent::NewRace(race),
                    None => {
                        stats.noise_lines += 1;
                        LineEvent::Noise
                    }
                },

                LineClass::ResultCandidate => match state.active_race() {
                    Some(race) => match extract_result(line, race, &self.config) {
                        Some(result) => {
                            stats.results_parsed += 1;
                            LineEvent::ResultRow(result)
                        }
                        None => {
                            stats.record_rejected(line);
                            LineEvent::Noise
                        }
                    },
                    None => {
                        // Result-shaped line before any header: discard, a
                        // record must never exist without its race
                        stats.orphan_result_lines += 1;
                        debug!("Discarding orphan result line {}", index + 1);
                        LineEvent::Noise
                    }
                },
            };

            let (next_state, flushed) = state.step(event);
            state = next_state;

            if let Some(section) = flushed {
                emit_section(section, &mut races, &mut results, &mut stats);
            }
        }

        // End of document: flush whatever race is still open
        if let Some(section) = state.finish() {
            emit_section(section, &mut races, &mut results, &mut stats);
        }

        info!(
            "Parsed {} races and {} results from {} lines",
            stats.races_parsed, stats.results_parsed, stats.total_lines
        );

        if !stats.has_results() {
            warn!("Bulletin yielded zero results; flagging for manual review");
        }

        ParseOutcome {
            races,
            results,
            stats,
        }
    }
}

/// Emit a flushed race section, applying empty-race elision: a race is only
/// ever stored paired with at least one result.
fn emit_section(
    section: RaceSection,
    races: &mut Vec<Race>,
    results: &mut Vec<RaceResult>,
    stats: &mut ParseStats,
) {
    if section.results.is_empty() {
        stats.races_dropped_empty += 1;
        debug!("Dropping race '{}' with zero results", section.race.name);
        return;
    }

    stats.races_parsed += 1;
    races.push(section.race);
    results.extend(section.results);
}

/// Decode an upload buffer as UTF-8, falling back to Latin-1 when the byte
/// sequence is not valid UTF-8. Interior NUL bytes mean the buffer is not a
/// text file and abort the whole operation.
fn decode_buffer<'a>(bytes: &'a [u8], source_name: &str) -> Result<Cow<'a, str>> {
    if bytes.contains(&0) {
        return Err(Error::decoding(
            source_name,
            "buffer contains NUL bytes and is not a text file",
        ));
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(Cow::Borrowed(text)),
        Err(_) => {
            debug!("Input is not valid UTF-8, decoding as Latin-1");
            // Latin-1 maps each byte to the code point of the same value
            Ok(Cow::Owned(bytes.iter().map(|&b| b as char).collect()))
        }
    }
}

#[cfg(test)]
mod decode_tests {
    use super::decode_buffer;

    #[test]
    fn test_utf8_passthrough() {
        let text = "Mettet 20-08-25 357 Jongen";
        let decoded = decode_buffer(text.as_bytes(), "test").unwrap();
        assert_eq!(decoded.as_ref(), text);
    }

    #[test]
    fn test_latin1_fallback() {
        // "Liège" in Latin-1: 0xE8 is è, invalid as UTF-8 on its own
        let bytes = b"Li\xE8ge 20-08-25 210 jeunes";
        let decoded = decode_buffer(bytes, "test").unwrap();
        assert_eq!(decoded.as_ref(), "Liège 20-08-25 210 jeunes");
    }

    #[test]
    fn test_nul_bytes_rejected() {
        let bytes = b"PK\x00\x03binary";
        assert!(decode_buffer(bytes, "upload.zip").is_err());
    }
}
