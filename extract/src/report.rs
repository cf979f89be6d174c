//! Structured extraction reporting.
//!
//! The hierarchy file carries no metadata. Everything about how it was
//! produced (counts, dropped lines, warnings, a digest for reproducibility
//! checks) goes into a separate [`ExtractionReport`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use ward_hierarchy_core::{HierarchyStats, WardHierarchy, validate_hierarchy};

use crate::error::Result;
use crate::parser::{DroppedLine, ExtractionOutcome};

/// Per-state counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSummary {
    pub state: String,
    pub lgas: usize,
    pub wards: usize,
}

/// Report for one extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Input file name, or `"-"` for stdin.
    pub source: String,
    /// RFC 3339 UTC timestamp.
    pub generated_at: String,
    pub total_lines: usize,
    pub recognized_lines: usize,
    pub coverage: f64,
    pub stats: HierarchyStats,
    pub states: Vec<StateSummary>,
    /// Drop events per reason, keyed by the reason's snake_case name.
    pub drop_counts: BTreeMap<String, usize>,
    /// Non-furniture drop events; footers, page numbers and column labels
    /// are only counted.
    pub dropped_lines: Vec<DroppedLine>,
    pub mode_switches: usize,
    pub removed_duplicate_wards: usize,
    pub removed_empty_lgas: usize,
    pub warnings: Vec<String>,
    pub validation_errors: Vec<String>,
    /// SHA-256 of the pretty-printed hierarchy JSON.
    pub output_sha256: String,
}

impl ExtractionReport {
    /// Builds the report for a finished extraction.
    pub fn from_outcome(source: &str, outcome: &ExtractionOutcome) -> Result<Self> {
        let diagnostics = &outcome.diagnostics;
        let hierarchy = &outcome.hierarchy;

        let states = hierarchy
            .iter()
            .map(|(state, lgas)| StateSummary {
                state: state.clone(),
                lgas: lgas.len(),
                wards: lgas.values().map(Vec::len).sum(),
            })
            .collect();

        let drop_counts = diagnostics
            .drop_counts()
            .into_iter()
            .map(|(reason, count)| (reason.to_string(), count))
            .collect();

        let dropped_lines = diagnostics
            .dropped
            .iter()
            .filter(|event| !event.reason.is_furniture())
            .cloned()
            .collect();

        Ok(Self {
            source: source.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            total_lines: diagnostics.total_lines,
            recognized_lines: diagnostics.recognized_lines(),
            coverage: diagnostics.coverage(),
            stats: hierarchy.stats(),
            states,
            drop_counts,
            dropped_lines,
            mode_switches: diagnostics.mode_switches,
            removed_duplicate_wards: outcome.cleanup.removed_duplicate_wards,
            removed_empty_lgas: outcome.cleanup.removed_empty_lgas,
            warnings: diagnostics.warnings(),
            validation_errors: validate_hierarchy(hierarchy)
                .iter()
                .map(ToString::to_string)
                .collect(),
            output_sha256: hierarchy_digest(hierarchy)?,
        })
    }
}

/// Hierarchy plus its report.
#[derive(Debug, Clone)]
pub struct ExtractionRun {
    pub hierarchy: WardHierarchy,
    pub report: ExtractionReport,
}

/// Hex SHA-256 of the hierarchy as written by `extract` (pretty JSON).
pub fn hierarchy_digest(hierarchy: &WardHierarchy) -> Result<String> {
    let json = serde_json::to_string_pretty(hierarchy)?;
    let hash = Sha256::digest(json.as_bytes());
    Ok(format!("{:x}", hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WardExtractor;

    #[test]
    fn test_report_counts_and_states() {
        let lines = [
            "-- 1 of 2 --",
            "???",
            "KANO STATE",
            "LGA NAME LGA",
            "DALA 10 GWAMMAJA 01",
            "KABUWAYA 02",
            "GWALE 11 DORAYI 01",
        ];
        let outcome = WardExtractor::default().extract(&lines);
        let report = ExtractionReport::from_outcome("kano.txt", &outcome).unwrap();

        assert_eq!(report.source, "kano.txt");
        assert_eq!(report.total_lines, 7);
        assert_eq!(report.recognized_lines, 6);
        assert_eq!(
            report.states,
            [StateSummary {
                state: "KANO".to_string(),
                lgas: 2,
                wards: 3
            }]
        );
        assert_eq!(report.drop_counts["footer"], 1);
        assert_eq!(report.drop_counts["noise"], 1);
        assert_eq!(report.drop_counts["unclassifiable"], 1);
        assert_eq!(report.dropped_lines.len(), 1);
        assert_eq!(report.dropped_lines[0].text, "???");
        assert!(report.validation_errors.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
    }

    #[test]
    fn test_digest_is_stable_and_hex() {
        let outcome = WardExtractor::default().extract(&["ASA 01 AFON 01"]);
        let first = hierarchy_digest(&outcome.hierarchy).unwrap();
        let second = hierarchy_digest(&outcome.hierarchy).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.bytes().all(|b| b.is_ascii_hexdigit()));
    }

    #[test]
    fn test_digest_of_empty_hierarchy() {
        assert_eq!(
            hierarchy_digest(&WardHierarchy::new()).unwrap(),
            "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
        );
    }

    #[test]
    fn test_report_serializes_drop_reasons_snake_case() {
        let outcome = WardExtractor::default().extract(&["KANO STATE", "GWAMMAJA 01"]);
        let report = ExtractionReport::from_outcome("-", &outcome).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["drop_counts"]["ward_without_lga"], 1);
        assert_eq!(json["dropped_lines"][0]["reason"], "ward_without_lga");
    }
}
