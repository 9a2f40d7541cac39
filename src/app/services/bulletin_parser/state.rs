//! Parse state machine for the single-pass bulletin scan
//!
//! The "current race" context is an explicit immutable value threaded
//! through the line loop: [`ParseState::step`] consumes the state and an
//! event and returns the successor state plus the race section it flushed,
//! if any. This keeps every transition testable line-by-line without
//! ambient mutable variables.

use crate::app::models::{Race, RaceResult};

/// Scan phase of the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No active race; result-shaped lines are orphans and get discarded
    Scanning,
    /// Just saw a race header; expecting a column-header line next
    HeaderZone,
    /// Actively collecting result rows for the current race
    InResults,
}

/// One race and the results collected for it so far
#[derive(Debug, Clone)]
pub struct RaceSection {
    pub race: Race,
    pub results: Vec<RaceResult>,
}

impl RaceSection {
    fn new(race: Race) -> Self {
        Self {
            race,
            results: Vec::new(),
        }
    }
}

/// Line event driving a state transition
#[derive(Debug, Clone)]
pub enum LineEvent {
    /// Blank, separator, or otherwise ignorable line
    Noise,
    /// Organization banner; closes the current section
    Banner,
    /// Recognized race header with its extracted race record
    NewRace(Race),
    /// Column header row; skipped without leaving the current section
    ColumnHeader,
    /// Successfully extracted result row for the active race
    ResultRow(RaceResult),
}

/// Immutable parse state for one document scan
#[derive(Debug, Clone)]
pub struct ParseState {
    phase: Phase,
    current: Option<RaceSection>,
}

impl Default for ParseState {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseState {
    /// Initial state: scanning, no active race
    pub fn new() -> Self {
        Self {
            phase: Phase::Scanning,
            current: None,
        }
    }

    /// Current scan phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The race result rows currently attach to, if any
    pub fn active_race(&self) -> Option<&Race> {
        self.current.as_ref().map(|section| &section.race)
    }

    /// Number of results accumulated for the active race
    pub fn pending_results(&self) -> usize {
        self.current
            .as_ref()
            .map(|section| section.results.len())
            .unwrap_or(0)
    }

    /// Apply one line event, returning the successor state and the section
    /// flushed by this transition, if any.
    ///
    /// A flushed section may hold zero results; the caller applies
    /// empty-race elision and decides what to emit.
    pub fn step(self, event: LineEvent) -> (Self, Option<RaceSection>) {
        match event {
            LineEvent::Noise | LineEvent::ColumnHeader => (self, None),

            LineEvent::Banner => {
                let flushed = self.current;
                (
                    Self {
                        phase: Phase::Scanning,
                        current: None,
                    },
                    flushed,
                )
            }

            LineEvent::NewRace(race) => {
                let flushed = self.current;
                (
                    Self {
                        phase: Phase::HeaderZone,
                        current: Some(RaceSection::new(race)),
                    },
                    flushed,
                )
            }

            LineEvent::ResultRow(result) => {
                // Result rows are only constructed against an active race;
                // without one the row is an orphan and never reaches here.
                let mut current = self.current;
                if let Some(section) = current.as_mut() {
                    section.results.push(result);
                }
                (
                    Self {
                        phase: Phase::InResults,
                        current,
                    },
                    None,
                )
            }
        }
    }

    /// End of document: flush whatever section is still open
    pub fn finish(self) -> Option<RaceSection> {
        self.current
    }
}
