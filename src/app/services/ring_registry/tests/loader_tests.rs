//! Tests for ring roster loading and lookups

use crate::app::services::ring_registry::RingRegistry;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_roster(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_load_roster_with_comments_and_blanks() {
    let file = write_roster(
        "# my lofts\n\
         BE1234567\n\
         \n\
         nl 7654321\n\
         BE2222222\n",
    );

    let registry = RingRegistry::load(file.path()).unwrap();

    assert_eq!(registry.ring_count(), 3);
    assert!(registry.is_registered("BE1234567"));
    // Entries are normalized: whitespace stripped, upper-cased
    assert!(registry.is_registered("NL7654321"));
    assert!(!registry.is_registered("BE9999999"));
}

#[test]
fn test_malformed_entries_skipped() {
    let file = write_roster(
        "BE1234567\n\
         not-a-ring\n\
         BE12\n",
    );

    let registry = RingRegistry::load(file.path()).unwrap();

    assert_eq!(registry.ring_count(), 1);
    assert_eq!(registry.lines_read(), 3);
}

#[test]
fn test_missing_roster_is_an_error() {
    let result = RingRegistry::load(std::path::Path::new("/nonexistent/roster.txt"));
    assert!(result.is_err());
}

#[test]
fn test_count_linkable() {
    use crate::app::models::{Category, Race, RaceResult};
    use chrono::NaiveDate;

    let file = write_roster("BE1234567\n");
    let registry = RingRegistry::load(file.path()).unwrap();

    let race = Race::new(
        "Mettet".to_string(),
        NaiveDate::from_ymd_opt(2025, 8, 20).unwrap(),
        Category::Young,
        357,
        0,
        "Racing Federation".to_string(),
        "08:00".to_string(),
    )
    .unwrap();

    let owned = RaceResult::new(
        race.id,
        1,
        "BE1234567".to_string(),
        "Jan Peeters".to_string(),
        92345,
        "14:30:12".to_string(),
        1452.3,
        0.28,
    )
    .unwrap();

    let foreign = RaceResult::new(
        race.id,
        2,
        "NL7654321".to_string(),
        "Piet Janssen".to_string(),
        92345,
        "14:31:02".to_string(),
        1440.1,
        0.56,
    )
    .unwrap();

    assert_eq!(registry.count_linkable(&[owned, foreign]), 1);
}
