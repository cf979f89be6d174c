//! Recovery of Nigeria's State → LGA → Ward hierarchy from PDF text.
//!
//! This crate turns the linearized text dump of the national ward listing,
//! a multi-hundred-page table whose column geometry was lost during PDF text
//! extraction, back into a [`WardHierarchy`]. It handles both table layouts
//! of the document (with and without a polling-unit count column), wrapped
//! LGA and ward names, interleaved page furniture and bare state headers.
//!
//! # Main entry points
//!
//! - [`extract_lines`]: extract from pre-split lines with default settings.
//! - [`extract_from_text`]: same, starting from raw text.
//! - [`extract_with_report`]: extract with a configuration and produce an
//!   [`ExtractionReport`] describing what was dropped and why.
//! - [`WardExtractor`]: the configured extractor itself.
//!
//! # Example
//!
//! ```
//! use ward_hierarchy_extract::extract_from_text;
//!
//! let text = "\
//! LAGOS STATE
//! LGA NAME LGA
//! CODE
//! IKEJA 05 OJODU WARD I 01
//! OJODU WARD II 02
//! -- 14 of 230 --
//! ";
//!
//! let hierarchy = extract_from_text(text);
//! assert_eq!(hierarchy.stats().wards, 2);
//! assert_eq!(
//!     serde_json::to_string(&hierarchy).unwrap(),
//!     r#"{"LAGOS":{"IKEJA":["OJODU WARD I","OJODU WARD II"]}}"#
//! );
//! ```
//!
//! [`WardHierarchy`]: ward_hierarchy_core::WardHierarchy
//! [`ExtractionReport`]: report::ExtractionReport

pub mod config;
pub mod error;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod report;

use tracing::debug;
use ward_hierarchy_core::WardHierarchy;

pub use config::ExtractorConfig;
pub use error::{ExtractError, Result};
pub use parser::{ExtractionOutcome, WardExtractor};

use report::{ExtractionReport, ExtractionRun};

/// Extracts the hierarchy from lines using the default configuration.
pub fn extract_lines<S: AsRef<str>>(lines: &[S]) -> WardHierarchy {
    WardExtractor::default().extract(lines).hierarchy
}

/// Splits raw text with [`normalize::to_lines`] and extracts the hierarchy.
pub fn extract_from_text(text: &str) -> WardHierarchy {
    let lines = normalize::to_lines(text);
    debug!(lines = lines.len(), "Prepared text");
    extract_lines(&lines)
}

/// Extracts the hierarchy and builds its report.
///
/// `source` names the input in the report (a file name, or `"-"` for
/// stdin).
///
/// # Errors
///
/// Returns [`ExtractError::InvalidConfig`] when `config` fails validation.
///
/// # Examples
///
/// ```
/// use ward_hierarchy_extract::{ExtractorConfig, extract_with_report};
///
/// let lines = ["KANO STATE", "DALA 10 GWAMMAJA 01", "-- 3 of 230 --", "3"];
/// let run = extract_with_report("kano.txt", &lines, &ExtractorConfig::default()).unwrap();
///
/// assert_eq!(run.hierarchy.wards("KANO", "DALA").unwrap(), ["GWAMMAJA"]);
/// assert_eq!(run.report.drop_counts["page_number"], 1);
/// assert!(run.report.warnings.is_empty());
/// ```
pub fn extract_with_report<S: AsRef<str>>(
    source: &str,
    lines: &[S],
    config: &ExtractorConfig,
) -> Result<ExtractionRun> {
    config.validate()?;
    let outcome = WardExtractor::new(config.clone()).extract(lines);
    let report = ExtractionReport::from_outcome(source, &outcome)?;
    Ok(ExtractionRun {
        hierarchy: outcome.hierarchy,
        report,
    })
}
