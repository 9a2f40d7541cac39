//! Parser for pigeon racing result bulletins
//!
//! Bulletins are semi-structured plain-text files produced by third-party
//! timing systems: Dutch/French column headers, line shapes that vary across
//! vendor versions, and organizational letterheads interleaved with data
//! rows. There is no fixed grammar; this parser recovers a clean set of
//! (race, result) records with per-line heuristics and a single-pass state
//! machine.
//!
//! ## Architecture
//!
//! - [`parser`] - Orchestration: input decoding and the line-processing loop
//! - [`classifier`] - Per-line lexical classification
//! - [`state`] - Explicit state machine threading the "current race" context
//! - [`race_header`] - Race metadata extraction with look-around
//! - [`result_line`] - Per-finisher record extraction
//! - [`field_parsers`] - Isolated, unit-testable extraction heuristics
//! - [`stats`] - Parse outcome and statistics
//!
//! ## Usage
//!
//! ```rust
//! use bulletin_processor::BulletinParser;
//!
//! let parser = BulletinParser::new();
//! let outcome = parser.parse_text(
//!     "Mettet 20-08-25 357 Jongen\n\
//!      NR Naam Ring Afstand Tijd Snelheid\n\
//!      1 Jan Peeters BE 1234567 92345 14.3012 1452.3\n",
//! );
//!
//! assert_eq!(outcome.races.len(), 1);
//! assert_eq!(outcome.results.len(), 1);
//! ```

pub mod classifier;
pub mod field_parsers;
pub mod parser;
pub mod race_header;
pub mod result_line;
pub mod state;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classifier::LineClass;
pub use parser::BulletinParser;
pub use state::{LineEvent, ParseState, Phase};
pub use stats::{ParseOutcome, ParseStats};
