//! Bounded lookahead for decisions the current line cannot make alone.
//!
//! Two ambiguities are resolved here: whether a bare numeral is a ward code,
//! a polling-unit count or page furniture, and whether a bare state name
//! opens a new state section. Both consult at most `window` following lines,
//! which keeps the scan linear.

use ward_hierarchy_core::{TableMode, normalize_key};

use super::util::{is_pu_count, is_row_code, is_unambiguous_data_row};

/// What the lines after the current one suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderContext {
    /// A `LGA NAME` column header appears before any data row.
    HeaderAhead,
    /// A data row appears before any `LGA NAME` header.
    DataAhead,
    /// Neither appears within the window.
    Inconclusive,
}

impl HeaderContext {
    pub fn is_header(self) -> bool {
        self == Self::HeaderAhead
    }
}

/// Scans up to `window` lines after `index` for a table header.
///
/// # Examples
///
/// ```
/// use ward_hierarchy_extract::parser::lookahead::{HeaderContext, lookahead};
///
/// let lines = ["CROSS RIVER", "LGA NAME LGA", "CODE"];
/// assert_eq!(lookahead(&lines, 0, 8), HeaderContext::HeaderAhead);
///
/// let lines = ["NIGER", "NIGER WARD 04"];
/// assert_eq!(lookahead(&lines, 0, 8), HeaderContext::DataAhead);
/// ```
pub fn lookahead<S: AsRef<str>>(lines: &[S], index: usize, window: usize) -> HeaderContext {
    for line in lines.iter().skip(index + 1).take(window) {
        let upper = normalize_key(line.as_ref());
        if upper.is_empty() {
            continue;
        }
        if upper.starts_with("LGA NAME") {
            return HeaderContext::HeaderAhead;
        }
        if is_unambiguous_data_row(&upper) {
            return HeaderContext::DataAhead;
        }
    }
    HeaderContext::Inconclusive
}

/// Role assigned to a line consisting only of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralRole {
    /// Completes the pending wrapped ward name.
    WardCode,
    /// Polling-unit count of the pending wrapped ward.
    PuCount,
    /// Page furniture.
    PageNumber,
    /// Unattributable; dropped.
    Stray,
}

/// Scan state the numeral decision depends on.
#[derive(Debug, Clone, Copy)]
pub struct NumeralContext {
    pub mode: TableMode,
    pub has_pending_ward: bool,
    pub has_pending_pu_count: bool,
    pub prev_was_footer: bool,
}

/// Decides what a bare numeral at `index` means.
///
/// A pending wrapped ward claims the numeral first: in `Basic` mode a
/// two-digit numeral is its ward code; in `WithPuCount` mode the first 1–3
/// digit numeral is its polling-unit count and a following two-digit numeral
/// its ward code. Anything else is a page number when it follows a footer or
/// precedes a table header, and stray otherwise.
pub fn resolve_numeral<S: AsRef<str>>(
    digits: &str,
    context: &NumeralContext,
    lines: &[S],
    index: usize,
    window: usize,
) -> NumeralRole {
    if context.has_pending_ward {
        match context.mode {
            TableMode::Basic if is_row_code(digits) => return NumeralRole::WardCode,
            TableMode::WithPuCount if !context.has_pending_pu_count && is_pu_count(digits) => {
                return NumeralRole::PuCount;
            }
            TableMode::WithPuCount if context.has_pending_pu_count && is_row_code(digits) => {
                return NumeralRole::WardCode;
            }
            _ => {}
        }
    }

    if context.prev_was_footer || lookahead(lines, index, window).is_header() {
        NumeralRole::PageNumber
    } else {
        NumeralRole::Stray
    }
}
