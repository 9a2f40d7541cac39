//! Tests for line classification

use crate::app::services::bulletin_parser::classifier::{LineClass, classify, is_result_shaped};
use crate::config::ParserConfig;

fn config() -> ParserConfig {
    ParserConfig::default()
}

#[test]
fn test_blank_and_separator_lines() {
    assert_eq!(classify("", &config()), LineClass::Blank);
    assert_eq!(classify("--------", &config()), LineClass::Separator);
    assert_eq!(classify("========", &config()), LineClass::Separator);
    // Too short a run is not a separator
    assert_ne!(classify("--", &config()), LineClass::Separator);
}

#[test]
fn test_banner_lines() {
    assert_eq!(
        classify("Data Technology Deerlijk - De Witpen LUMMEN", &config()),
        LineClass::Banner
    );
    // A city name alone is not a banner
    assert_ne!(classify("LUMMEN results below", &config()), LineClass::Banner);
}

#[test]
fn test_race_header_requires_date_and_category() {
    assert_eq!(
        classify("Mettet 20-08-25 357 Jongen", &config()),
        LineClass::RaceHeader
    );
    assert_eq!(
        classify("Soissons 21/08/25 412 oude & jaar", &config()),
        LineClass::RaceHeader
    );

    // Date without category keyword: not a header
    assert_ne!(
        classify("Printed 20-08-25 by club secretary", &config()),
        LineClass::RaceHeader
    );

    // Category without date: not a header
    assert_ne!(
        classify("Jongen race results", &config()),
        LineClass::RaceHeader
    );
}

#[test]
fn test_column_header_lines() {
    assert_eq!(
        classify("NR Naam Ring Afstand Tijd Snelheid", &config()),
        LineClass::ColumnHeader
    );
    assert_eq!(
        classify("NO NOM BAGUE DISTANCE TEMPS VITESSE", &config()),
        LineClass::ColumnHeader
    );
}

#[test]
fn test_result_line_never_misclassified_as_column_header() {
    // "RING" appears inside the line, but the numeric result shape wins
    let line = "1 RING Peeters BE 1234567 92345 14.3012 1452.3";
    assert_eq!(classify(line, &config()), LineClass::ResultCandidate);
}

#[test]
fn test_result_shape_predicate() {
    let cfg = config();

    assert!(is_result_shaped(
        "1 Jan Peeters BE 1234567 92345 14.3012 1452.3",
        &cfg
    ));

    // No leading integer
    assert!(!is_result_shaped(
        "NR NAAM RING AFSTAND TIJD SNELHEID",
        &cfg
    ));

    // Too few tokens
    assert!(!is_result_shaped("1 BE1234567 1452.3", &cfg));

    // Leading integer but neither ring-shaped nor decimal token
    assert!(!is_result_shaped(
        "12 birds were basketed on wednesday evening okay",
        &cfg
    ));

    // Position zero is not a valid rank
    assert!(!is_result_shaped(
        "0 Jan Peeters BE 1234567 92345 14.3012 1452.3",
        &cfg
    ));
}

#[test]
fn test_unrecognized_lines_are_other() {
    assert_eq!(
        classify("Basketing closed at the clubhouse", &config()),
        LineClass::Other
    );
}
