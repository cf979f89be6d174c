//! Diagnostics for lines the scan discarded.
//!
//! The scan never fails on malformed input; instead every dropped line and
//! every abandoned wrap fragment is recorded here with a reason.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Why a line did not contribute to the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// `-- N of M --` page footer.
    Footer,
    /// Bare numeral identified as a page number.
    PageNumber,
    /// Bare numeral that is neither a code, a count nor a page number.
    StrayNumeral,
    /// Table header or column label.
    Noise,
    /// Ward row seen while no LGA was active.
    WardWithoutLga,
    /// Fragment discarded because a wrap buffer overflowed.
    WrapOverflow,
    /// Fragment abandoned when its wrapped name never completed.
    WrapAborted,
    /// Data row that matched no known row shape.
    Unclassifiable,
}

impl DropReason {
    /// Page furniture is expected in every document and is not a loss.
    pub fn is_furniture(self) -> bool {
        matches!(self, Self::Footer | Self::PageNumber | Self::Noise)
    }
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Footer => write!(f, "footer"),
            Self::PageNumber => write!(f, "page_number"),
            Self::StrayNumeral => write!(f, "stray_numeral"),
            Self::Noise => write!(f, "noise"),
            Self::WardWithoutLga => write!(f, "ward_without_lga"),
            Self::WrapOverflow => write!(f, "wrap_overflow"),
            Self::WrapAborted => write!(f, "wrap_aborted"),
            Self::Unclassifiable => write!(f, "unclassifiable"),
        }
    }
}

/// One dropped-line event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedLine {
    /// Zero-based index into the scanned line sequence.
    pub index: usize,
    pub text: String,
    pub reason: DropReason,
}

/// Diagnostics for a single scan.
#[derive(Debug, Clone, Default)]
pub struct ExtractionDiagnostics {
    pub total_lines: usize,
    pub dropped: Vec<DroppedLine>,
    pub state_headers: Vec<String>,
    pub mode_switches: usize,
    pub lgas_started: usize,
}

impl ExtractionDiagnostics {
    pub(super) fn record(&mut self, index: usize, text: &str, reason: DropReason) {
        tracing::trace!(index, line = text, %reason, "Dropped line");
        self.dropped.push(DroppedLine {
            index,
            text: text.to_string(),
            reason,
        });
    }

    /// Number of distinct lines with a non-furniture drop event.
    pub fn unresolved_lines(&self) -> usize {
        let mut indices = self
            .dropped
            .iter()
            .filter(|event| !event.reason.is_furniture())
            .map(|event| event.index)
            .collect::<Vec<_>>();
        indices.sort_unstable();
        indices.dedup();
        indices.len()
    }

    /// Lines that either contributed to the hierarchy or were identified as
    /// page furniture.
    pub fn recognized_lines(&self) -> usize {
        self.total_lines.saturating_sub(self.unresolved_lines())
    }

    /// Share of lines recognized; `1.0` for empty input.
    pub fn coverage(&self) -> f64 {
        if self.total_lines == 0 {
            return 1.0;
        }
        self.recognized_lines() as f64 / self.total_lines as f64
    }

    pub fn drop_counts(&self) -> BTreeMap<DropReason, usize> {
        let mut counts = BTreeMap::new();
        for event in &self.dropped {
            *counts.entry(event.reason).or_insert(0) += 1;
        }
        counts
    }

    pub fn count(&self, reason: DropReason) -> usize {
        self.dropped
            .iter()
            .filter(|event| event.reason == reason)
            .count()
    }

    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let wrap_losses = self.count(DropReason::WrapOverflow) + self.count(DropReason::WrapAborted);
        if wrap_losses > 0 {
            warnings.push(format!(
                "Discarded {wrap_losses} wrapped name fragments that never completed"
            ));
        }

        let orphans = self.count(DropReason::WardWithoutLga);
        if orphans > 0 {
            warnings.push(format!("Dropped {orphans} ward rows seen before any LGA"));
        }

        let unknown = self.count(DropReason::Unclassifiable) + self.count(DropReason::StrayNumeral);
        if unknown > 0 {
            warnings.push(format!("Could not classify {unknown} lines"));
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_reason_display_matches_serde() {
        let reasons = [
            (DropReason::Footer, "footer"),
            (DropReason::PageNumber, "page_number"),
            (DropReason::StrayNumeral, "stray_numeral"),
            (DropReason::Noise, "noise"),
            (DropReason::WardWithoutLga, "ward_without_lga"),
            (DropReason::WrapOverflow, "wrap_overflow"),
            (DropReason::WrapAborted, "wrap_aborted"),
            (DropReason::Unclassifiable, "unclassifiable"),
        ];

        for (reason, expected) in reasons {
            assert_eq!(reason.to_string(), expected);
            let json = serde_json::to_string(&reason).unwrap();
            assert_eq!(json, format!("\"{expected}\""));
        }
    }

    #[test]
    fn test_coverage_ignores_furniture() {
        let mut diagnostics = ExtractionDiagnostics {
            total_lines: 4,
            ..Default::default()
        };
        diagnostics.record(0, "-- 1 of 2 --", DropReason::Footer);
        diagnostics.record(1, "LGA NAME", DropReason::Noise);
        diagnostics.record(2, "???", DropReason::Unclassifiable);

        assert_eq!(diagnostics.unresolved_lines(), 1);
        assert_eq!(diagnostics.recognized_lines(), 3);
        assert!((diagnostics.coverage() - 0.75).abs() < f64::EPSILON);
        assert_eq!(diagnostics.warnings(), vec!["Could not classify 1 lines"]);
    }

    #[test]
    fn test_unresolved_lines_counts_each_index_once() {
        let mut diagnostics = ExtractionDiagnostics {
            total_lines: 2,
            ..Default::default()
        };
        diagnostics.record(1, "A", DropReason::WrapOverflow);
        diagnostics.record(1, "A", DropReason::WrapAborted);
        assert_eq!(diagnostics.unresolved_lines(), 1);
        assert_eq!(diagnostics.drop_counts().len(), 2);
    }

    #[test]
    fn test_empty_input_has_full_coverage() {
        let diagnostics = ExtractionDiagnostics::default();
        assert_eq!(diagnostics.coverage(), 1.0);
        assert!(diagnostics.warnings().is_empty());
    }
}
