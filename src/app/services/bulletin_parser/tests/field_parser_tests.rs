//! Tests for the isolated field extraction heuristics

use crate::app::models::Category;
use crate::app::services::bulletin_parser::field_parsers::*;
use chrono::NaiveDate;

// =============================================================================
// Dates
// =============================================================================

#[test]
fn test_date_normalization() {
    assert_eq!(
        find_date("Mettet 20-08-25 357 Jongen"),
        NaiveDate::from_ymd_opt(2025, 8, 20)
    );
    assert_eq!(
        find_date("Soissons 05/01/24"),
        NaiveDate::from_ymd_opt(2024, 1, 5)
    );
    assert_eq!(find_date("no date here"), None);
}

#[test]
fn test_invalid_calendar_dates_rejected() {
    // Matches the token shape but is not a real date
    assert_eq!(find_date("race 32-13-25 Jongen"), None);
    assert!(has_date_token("race 32-13-25 Jongen"));
}

#[test]
fn test_date_token_needs_boundaries() {
    // Digits embedded in a longer number are not a date
    assert!(!has_date_token("ring 123-45-6789012"));
}

// =============================================================================
// Category
// =============================================================================

#[test]
fn test_category_detection_dutch() {
    assert_eq!(detect_category("357 Jongen"), Category::Young);
    assert_eq!(detect_category("412 oude duiven"), Category::Old);
    assert_eq!(detect_category("oude & jaar"), Category::OldAndYearling);
    assert_eq!(detect_category("88 jaarduiven"), Category::Yearling);
}

#[test]
fn test_category_detection_french() {
    assert_eq!(detect_category("210 jeunes"), Category::Young);
    assert_eq!(detect_category("150 vieux"), Category::Old);
}

#[test]
fn test_category_detection_is_case_insensitive() {
    assert_eq!(detect_category("357 JONGEN"), Category::Young);
}

#[test]
fn test_category_unknown() {
    assert_eq!(detect_category("Mettet 20-08-25"), Category::Unknown);
}

// =============================================================================
// Field size and participants
// =============================================================================

#[test]
fn test_field_size_adjacent_to_category() {
    assert_eq!(
        extract_field_size("Mettet 20-08-25 357 Jongen", 10, 5000),
        Some(357)
    );
    assert_eq!(extract_field_size("412 duiven los", 10, 5000), Some(412));
}

#[test]
fn test_field_size_bounds() {
    // Below the plausible minimum
    assert_eq!(extract_field_size("5 Jongen", 10, 5000), None);
    // Tokens longer than 4 digits are never field sizes
    assert_eq!(extract_field_size("12345 Jongen", 10, 5000), None);
}

#[test]
fn test_field_size_requires_adjacency() {
    // A number not followed by a category keyword is not a field size
    assert_eq!(
        extract_field_size("Mettet 357 birds entered today", 10, 5000),
        None
    );
}

#[test]
fn test_participants_marker() {
    assert_eq!(extract_participants("race Deelnemers:42 info"), Some(42));
    assert_eq!(extract_participants("Participants:19"), Some(19));
    assert_eq!(extract_participants("Deelnemers: 42"), None); // split marker
    assert_eq!(extract_participants("no marker"), None);
}

// =============================================================================
// Unloading time and organizing body
// =============================================================================

#[test]
fn test_unloading_time_markers() {
    assert_eq!(
        extract_unloading_time("Mettet LOSTIJD:08:30 357 Jongen"),
        Some("08:30".to_string())
    );
    assert_eq!(
        extract_unloading_time("Soissons LACHER:07:45 210 jeunes"),
        Some("07:45".to_string())
    );
    assert_eq!(extract_unloading_time("Mettet 357 Jongen"), None);
    // Malformed time after the marker degrades to none, not garbage
    assert_eq!(extract_unloading_time("LOSTIJD:8h30"), None);
}

#[test]
fn test_organizing_body_lookup() {
    let window = [
        "Mettet 20-08-25 357 Jongen",
        "Koninklijke Duivenbond Lummen",
        "NR Naam Ring",
    ];
    assert_eq!(
        find_organizing_body(window),
        Some("Koninklijke Duivenbond Lummen".to_string())
    );

    let no_org = ["Mettet 20-08-25 357 Jongen", "NR Naam Ring"];
    assert_eq!(find_organizing_body(no_org), None);
}

// =============================================================================
// Race name
// =============================================================================

#[test]
fn test_race_name_leading_tokens() {
    assert_eq!(
        extract_race_name("Mettet 20-08-25 357 Jongen"),
        Some("Mettet".to_string())
    );
    assert_eq!(
        extract_race_name("La Souterraine 21-08-25 88 oude"),
        Some("La Souterraine".to_string())
    );
    // Line opening with data tokens has no extractable name
    assert_eq!(extract_race_name("20-08-25 357 Jongen"), None);
}

// =============================================================================
// Ring numbers
// =============================================================================

#[test]
fn test_ring_number_single_token() {
    let tokens = ["Jan", "Peeters", "BE1234567", "92345"];
    assert_eq!(
        find_ring_number(&tokens),
        Some((2, 1, "BE1234567".to_string()))
    );
}

#[test]
fn test_ring_number_split_tokens() {
    let tokens = ["Jan", "Peeters", "BE", "1234567", "92345"];
    assert_eq!(
        find_ring_number(&tokens),
        Some((2, 2, "BE1234567".to_string()))
    );
}

#[test]
fn test_ring_number_serial_bounds() {
    // 5-digit serial is too short, 10-digit too long
    assert_eq!(find_ring_number(&["BE", "12345"]), None);
    assert_eq!(find_ring_number(&["BE1234567890"]), None);
    assert_eq!(find_ring_number(&["FR123456789"]), Some((0, 1, "FR123456789".to_string())));
}

#[test]
fn test_ring_number_prefix_shape() {
    // Lowercase or non-letter prefixes are not federation codes
    assert_eq!(find_ring_number(&["be1234567"]), None);
    assert_eq!(find_ring_number(&["B1", "1234567"]), None);
}

#[test]
fn test_normalize_ring_number() {
    assert_eq!(normalize_ring_number("be 1234567"), "BE1234567");
    assert_eq!(normalize_ring_number(" BE1234567 "), "BE1234567");
}

// =============================================================================
// Distance, elapsed time, speed
// =============================================================================

#[test]
fn test_distance_meter_range() {
    assert_eq!(extract_distance(&["92345", "14.3012"]), Some(92345));
    // First plausible token wins
    assert_eq!(extract_distance(&["92345", "104500"]), Some(92345));
}

#[test]
fn test_distance_kilometer_scaling() {
    // Only a km-scale token available: scaled by 1000
    assert_eq!(extract_distance(&["92", "14.3012"]), Some(92000));
}

#[test]
fn test_distance_absent() {
    assert_eq!(extract_distance(&["14.3012", "1452.3"]), None);
    // Out-of-range integers are not distances
    assert_eq!(extract_distance(&["1234567890"]), None);
}

#[test]
fn test_elapsed_time_reconstruction() {
    assert_eq!(
        extract_elapsed_time(&["92345", "14.3012", "1452.3"]),
        Some("14:30:12".to_string())
    );
    // Fifth decimal digit (fractional second) is dropped
    assert_eq!(
        extract_elapsed_time(&["14.30125"]),
        Some("14:30:12".to_string())
    );
    assert_eq!(extract_elapsed_time(&["1452.3"]), None);
}

#[test]
fn test_speed_last_decimal_token() {
    // Speed is the rightmost decimal-looking token
    assert_eq!(extract_speed(&["92345", "14.3012", "1452.3"]), Some(1452.3));
}

#[test]
fn test_speed_plausibility_floor() {
    // A lone elapsed-time-like decimal is below the speed floor
    assert_eq!(extract_speed(&["92345", "14.3012"]), None);
}

// =============================================================================
// Coefficient
// =============================================================================

#[test]
fn test_coefficient_formula() {
    let c = compute_coefficient(1, 357, 5000);
    assert!((c - 0.2801).abs() < 0.001);

    assert!((compute_coefficient(50, 1000, 5000) - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_coefficient_field_size_cap() {
    // Field sizes above the cap are clamped before dividing
    let capped = compute_coefficient(10, 12000, 5000);
    let at_cap = compute_coefficient(10, 5000, 5000);
    assert!((capped - at_cap).abs() < f64::EPSILON);
}
