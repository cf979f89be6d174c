//! End-to-end extraction scenarios through the public API.

use std::fs;
use std::path::PathBuf;

use ward_hierarchy_core::{HierarchyStats, validate_hierarchy};
use ward_hierarchy_extract::parser::DropReason;
use ward_hierarchy_extract::report::hierarchy_digest;
use ward_hierarchy_extract::{
    ExtractorConfig, WardExtractor, extract_from_text, extract_lines, extract_with_report,
};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

#[test]
fn test_sample_fixture_hierarchy() {
    let hierarchy = extract_from_text(&fixture("sample-wards.txt"));

    assert_eq!(
        hierarchy.stats(),
        HierarchyStats {
            states: 4,
            lgas: 7,
            wards: 17
        }
    );
    assert_eq!(
        hierarchy.wards("ABIA", "ABA NORTH").unwrap(),
        ["ARIARIA MARKET", "ASAOKPU/UMUOLA", "EZIAMA"]
    );
    assert_eq!(
        hierarchy.wards("ABIA", "ISIALA NGWA NORTH").unwrap(),
        ["AMAISE ANABA", "AMASAA NTIGHA", "UMUOHA", "UMUNNA"]
    );
    assert_eq!(
        hierarchy.wards("LAGOS", "APAPA").unwrap(),
        ["APAPA I (MARINE ROAD AND ENVIRONS)", "IJORA BADIA"]
    );
    assert_eq!(
        hierarchy.wards("LAGOS", "IKEJA").unwrap(),
        ["ANIFOWOSHE / IKEJA", "OJODU"]
    );
    assert_eq!(
        hierarchy.wards("PLATEAU", "BARKIN LADI").unwrap(),
        ["BARKIN LADI", "GASSA / SHO"]
    );
    assert_eq!(
        hierarchy.wards("PLATEAU", "BOKKOS").unwrap(),
        ["BOKKOS", "BUTURA KAMPANI"]
    );
    assert_eq!(
        hierarchy.wards("FCT", "ABAJI").unwrap(),
        ["ABAJI CENTRAL", "AGYANA"]
    );
    assert!(validate_hierarchy(&hierarchy).is_empty());
}

#[test]
fn test_sample_fixture_report() {
    let text = fixture("sample-wards.txt");
    let lines = ward_hierarchy_extract::normalize::to_lines(&text);
    let run = extract_with_report("sample-wards.txt", &lines, &ExtractorConfig::default()).unwrap();
    let report = run.report;

    assert_eq!(report.total_lines, lines.len());
    assert_eq!(report.recognized_lines, lines.len());
    assert_eq!(report.coverage, 1.0);
    assert_eq!(report.drop_counts["footer"], 5);
    assert_eq!(report.drop_counts["page_number"], 4);
    assert_eq!(report.mode_switches, 1);
    assert_eq!(report.removed_duplicate_wards, 1);
    assert!(report.dropped_lines.is_empty());
    assert!(report.warnings.is_empty());
    assert_eq!(report.output_sha256, hierarchy_digest(&run.hierarchy).unwrap());

    let states: Vec<_> = report.states.iter().map(|s| s.state.as_str()).collect();
    assert_eq!(states, ["ABIA", "FCT", "LAGOS", "PLATEAU"]);
}

#[test]
fn test_crlf_and_form_feed_text() {
    let hierarchy = extract_from_text(&fixture("crlf-pages.txt"));
    assert_eq!(
        hierarchy.wards("ABIA", "ABA NORTH").unwrap(),
        ["ARIARIA MARKET", "ASAOKPU/UMUOLA"]
    );
}

#[test]
fn test_output_is_deterministic() {
    let text = fixture("sample-wards.txt");
    let first = serde_json::to_string_pretty(&extract_from_text(&text)).unwrap();
    let second = serde_json::to_string_pretty(&extract_from_text(&text)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_ward_only_rows() {
    let hierarchy = extract_lines(&[
        "LAGOS STATE",
        "LGA NAME LGA",
        "IKEJA 05 OJODU WARD I 01",
        "OJODU WARD II 02",
    ]);
    assert_eq!(
        serde_json::to_string(&hierarchy).unwrap(),
        r#"{"LAGOS":{"IKEJA":["OJODU WARD I","OJODU WARD II"]}}"#
    );
}

#[test]
fn test_wrapped_ward_name() {
    let hierarchy = extract_lines(&["IKEJA 05 OJODU WARD", "I (MARINE ROAD", "01"]);
    assert_eq!(
        hierarchy.wards("ABIA", "IKEJA").unwrap(),
        ["OJODU WARD I (MARINE ROAD"]
    );
}

#[test]
fn test_pu_count_layout() {
    let hierarchy = extract_lines(&["NO OF PU", "BARKIN LADI 01 BARKIN LADI 15 01"]);
    assert_eq!(
        hierarchy.wards("ABIA", "BARKIN LADI").unwrap(),
        ["BARKIN LADI"]
    );
}

#[test]
fn test_footer_and_page_number_leave_no_entries() {
    let outcome = WardExtractor::default().extract(&["-- 12 of 230 --", "12"]);
    assert!(outcome.hierarchy.is_empty());
    assert_eq!(outcome.diagnostics.count(DropReason::Footer), 1);
    assert_eq!(outcome.diagnostics.count(DropReason::PageNumber), 1);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = ExtractorConfig {
        wrap_capacity: 0,
        ..Default::default()
    };
    let err = extract_with_report("-", &["ASA 01 AFON 01"], &config).unwrap_err();
    assert_eq!(err.to_string(), "invalid config: wrap_capacity must be at least 1");
}

#[test]
fn test_small_wrap_capacity_discards_long_wraps() {
    let config = ExtractorConfig {
        wrap_capacity: 1,
        ..Default::default()
    };
    let outcome = WardExtractor::new(config).extract(&["IKEJA 05 OJODU WARD", "I (MARINE ROAD", "01"]);
    assert!(outcome.hierarchy.is_empty());
    assert_eq!(outcome.diagnostics.count(DropReason::WrapOverflow), 2);
}
