//! Test utilities and fixtures for bulletin parser testing
//!
//! Shared sample bulletins and constructors used across the test modules.
//! The fixtures mirror real Data Technology exports: a letterhead banner,
//! a race header with date/count/category, a column-header row, and
//! whitespace-aligned result rows.

use crate::app::models::{Category, Race};
use chrono::NaiveDate;

// Test modules
mod classifier_tests;
mod field_parser_tests;

/// A single-race bulletin matching the shape of a real export
pub fn single_race_bulletin() -> &'static str {
    "Data Technology Deerlijk - De Witpen LUMMEN\n\
     --------------------------------------------\n\
     Mettet 20-08-25 357 Jongen LOSTIJD:08:30 Deelnemers:42\n\
     NR Naam Ring Afstand Tijd Snelheid\n\
     1 Jan Peeters BE 1234567 92345 14.3012 1452.3\n\
     2 Piet Janssen BE 7654321 92100 14.3155 1448.9\n\
     3 Marc Wouters NL 6543210 91800 14.3301 1441.2\n"
}

/// A bulletin with two races separated by a vendor banner
pub fn two_race_bulletin() -> String {
    format!(
        "{}\
         \n\
         Data Technology Deerlijk\n\
         Soissons 21-08-25 412 oude & jaar LOSTIJD:07:45\n\
         NR Naam Ring Afstand Tijd Snelheid\n\
         1 Els Mertens BE1111111 104500 15.0210 1380.5\n\
         2 Jos Claes BE 2222222 104200 15.0355 1375.0\n",
        single_race_bulletin()
    )
}

/// Construct a race for result-extraction tests
pub fn test_race(declared_field_size: u32) -> Race {
    Race::new(
        "Mettet".to_string(),
        NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
        Category::Young,
        declared_field_size,
        0,
        "Racing Federation".to_string(),
        "08:00".to_string(),
    )
    .unwrap()
}
