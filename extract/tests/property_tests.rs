//! Property-based tests for normalization and the line scan.
//!
//! - Normalization is idempotent
//! - The scan never panics on arbitrary line sequences
//! - Cleaned output always satisfies the hierarchy invariants

use proptest::prelude::*;
use ward_hierarchy_core::{normalize_key, normalize_name, validate_hierarchy};
use ward_hierarchy_extract::{WardExtractor, extract_lines};

/// Lines drawn from the shapes that actually occur in ward listings.
fn table_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z]{2,8}( [A-Z]{2,8}){0,3} [0-9]{2}",
        "[A-Z]{2,8} [0-9]{2} [A-Z]{2,8}( [A-Z]{2,8}){0,2} [0-9]{2}",
        "[A-Z]{2,8}( [A-Z]{2,8}){0,2} [0-9]{1,3} [0-9]{2}",
        "[A-Z]{2,8}( [A-Z/()]{1,8}){0,2}",
        "[0-9]{1,3}",
        "-- [0-9]{1,3} of [0-9]{1,3} --",
        Just("LGA NAME LGA".to_string()),
        Just("NO OF PU".to_string()),
        Just("KANO STATE".to_string()),
        Just("CROSS RIVER".to_string()),
    ]
}

#[test]
fn proptest_normalize_name_idempotent() {
    proptest!(|(text in "[ \\tA-Za-z0-9/()'-]{0,60}")| {
        let once = normalize_name(&text);
        prop_assert_eq!(normalize_name(&once), once.clone());
        prop_assert!(!once.starts_with(' ') && !once.ends_with(' '));
        prop_assert!(!once.contains("  "));
    });
}

#[test]
fn proptest_normalize_key_idempotent() {
    proptest!(|(text in "[ \\tA-Za-z0-9/()'-]{0,60}")| {
        let once = normalize_key(&text);
        prop_assert_eq!(normalize_key(&once), once);
    });
}

#[test]
fn proptest_scan_never_panics_on_arbitrary_text() {
    proptest!(|(lines in prop::collection::vec("\\PC{0,40}", 0..60))| {
        let _ = extract_lines(&lines);
    });
}

#[test]
fn proptest_output_satisfies_invariants() {
    proptest!(|(lines in prop::collection::vec(table_line(), 0..80))| {
        let outcome = WardExtractor::default().extract(&lines);
        let errors = validate_hierarchy(&outcome.hierarchy);
        prop_assert!(errors.is_empty(), "invariant violations: {:?}", errors);
        prop_assert!(outcome.diagnostics.coverage() <= 1.0);
    });
}

#[test]
fn proptest_scan_is_deterministic() {
    proptest!(ProptestConfig::with_cases(64), |(lines in prop::collection::vec(table_line(), 0..80))| {
        let first = serde_json::to_string(&extract_lines(&lines)).unwrap();
        let second = serde_json::to_string(&extract_lines(&lines)).unwrap();
        prop_assert_eq!(first, second);
    });
}
