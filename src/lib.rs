//! Bulletin Processor Library
//!
//! A Rust library for parsing pigeon racing result bulletins — the
//! semi-structured, multi-language (Dutch/French) plain-text files produced
//! by third-party electronic timing systems — into clean race and result
//! records.
//!
//! This library provides tools for:
//! - Classifying bulletin lines (noise, race headers, column headers, results)
//!   with a single-pass state machine
//! - Extracting race metadata (date, category, field size, unloading time)
//!   from loosely formatted header zones
//! - Extracting per-finisher result records anchored on position and ring
//!   number, with best-effort enrichment of secondary fields
//! - Loading a registry of known ring numbers for downstream linking
//! - Exporting parsed batches for a persistence layer to consume

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod bulletin_parser;
        pub mod ring_registry;
        pub mod sink;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Category, Race, RaceResult};
pub use app::services::bulletin_parser::{BulletinParser, ParseOutcome, ParseStats};
pub use config::ParserConfig;

/// Result type alias for the bulletin processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for bulletin processing operations
///
/// The parser itself never fails on malformed *content* — every content-level
/// anomaly degrades to a skipped line or a defaulted field. Errors exist only
/// at the edges: I/O, undecodable input, registry loading, and configuration.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input buffer could not be decoded as text
    #[error("Decoding error in '{file}': {message}")]
    Decoding { file: String, message: String },

    /// Ring registry error
    #[error("Ring registry error: {message}")]
    RingRegistry { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Export sink error
    #[error("Export error: {message}")]
    Export { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Invalid input glob pattern
    #[error("Invalid input pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a decoding error
    pub fn decoding(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decoding {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a ring registry error
    pub fn ring_registry(message: impl Into<String>) -> Self {
        Self::RingRegistry {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an export sink error
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::InvalidPattern {
            pattern: "unknown".to_string(),
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Export {
            message: error.to_string(),
        }
    }
}
