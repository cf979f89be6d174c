//! Row tokenizer and splitter.
//!
//! Data rows arrive as whitespace-separated tokens with no column geometry.
//! Two-digit tokens are the anchors: the last token is the ward code and an
//! earlier one, when present, the LGA code. The partition around those
//! anchors depends on the active [`TableMode`].
//!
//! ```text
//! Basic:        LGA NAME <LGA_CODE> WARD NAME <WARD_CODE>
//! WithPuCount:  LGA NAME <LGA_CODE> WARD NAME <PU_COUNT> <WARD_CODE>
//! ```

use regex::Regex;
use std::sync::LazyLock;

use ward_hierarchy_core::{TableMode, normalize_name};

use super::util::{is_pu_count, is_row_code};

/// Longest line still accepted as an LGA name fragment.
pub const MAX_LGA_FRAGMENT_LEN: usize = 40;

static PATTERNS: LazyLock<RowPatterns> = LazyLock::new(RowPatterns::new);

struct RowPatterns {
    standalone_code: Regex,
    fragment_chars: Regex,
    trailing_code: Regex,
}

impl RowPatterns {
    fn new() -> Self {
        Self {
            standalone_code: Regex::new(r"\b\d{2}\b|\d{2}$").expect("static regex must compile"),
            fragment_chars: Regex::new(r"^[A-Z0-9\s'’/\-().]+$").expect("static regex must compile"),
            trailing_code: Regex::new(r"\s\d{2}$").expect("static regex must compile"),
        }
    }
}

/// Where a new LGA's name comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LgaName {
    /// Tokens before the LGA code on the same line.
    Inline(String),
    /// The row starts with its LGA code; the name was wrapped onto the
    /// preceding lines and sits in the LGA fragment buffer.
    FromFragments,
}

/// Shape of one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowShape {
    /// `WARD NAME <WARD_CODE>` under the active LGA.
    WardOnly { ward: String },
    /// A complete row that opens a new LGA.
    LgaWithWard { lga: LgaName, ward: String },
    /// A row that opens a new LGA whose ward name continues on later lines.
    LgaWithWrappedWard { lga: LgaName, ward_start: String },
    /// The first fragment of a wrapped ward name under the active LGA.
    WardStart,
    /// Part of an LGA name wrapped across lines.
    LgaFragment,
    /// Matches no known row shape.
    Unrecognized,
}

/// Splits a data row according to the active table mode.
///
/// # Examples
///
/// ```
/// use ward_hierarchy_core::TableMode;
/// use ward_hierarchy_extract::parser::split::{LgaName, RowShape, split_row};
///
/// assert_eq!(
///     split_row("IKEJA 05 OJODU WARD I 01", TableMode::Basic, false),
///     RowShape::LgaWithWard {
///         lga: LgaName::Inline("IKEJA".to_string()),
///         ward: "OJODU WARD I".to_string(),
///     }
/// );
/// assert_eq!(
///     split_row("BARKIN LADI 01 BARKIN LADI 15 01", TableMode::WithPuCount, false),
///     RowShape::LgaWithWard {
///         lga: LgaName::Inline("BARKIN LADI".to_string()),
///         ward: "BARKIN LADI".to_string(),
///     }
/// );
/// ```
pub fn split_row(line: &str, mode: TableMode, has_active_lga: bool) -> RowShape {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(last) = tokens.last() else {
        return RowShape::Unrecognized;
    };

    if !is_row_code(last) {
        return split_incomplete(line, &tokens, mode, has_active_lga);
    }

    match mode {
        TableMode::Basic => split_basic(&tokens),
        TableMode::WithPuCount => split_with_pu_count(&tokens, has_active_lga),
    }
}

/// A row whose ward code did not make it onto this line.
fn split_incomplete(line: &str, tokens: &[&str], mode: TableMode, has_active_lga: bool) -> RowShape {
    if mode == TableMode::Basic {
        if let Some(lga_code) = first_code(tokens, tokens.len()) {
            return RowShape::LgaWithWrappedWard {
                lga: lga_name(tokens, lga_code),
                ward_start: join(&tokens[lga_code + 1..]),
            };
        }
    }

    if has_active_lga {
        RowShape::WardStart
    } else if looks_like_lga_fragment(line) {
        RowShape::LgaFragment
    } else {
        RowShape::Unrecognized
    }
}

fn split_basic(tokens: &[&str]) -> RowShape {
    let ward_code = tokens.len() - 1;
    match first_code(tokens, ward_code) {
        None => RowShape::WardOnly {
            ward: join(&tokens[..ward_code]),
        },
        Some(lga_code) => RowShape::LgaWithWard {
            lga: lga_name(tokens, lga_code),
            ward: join(&tokens[lga_code + 1..ward_code]),
        },
    }
}

fn split_with_pu_count(tokens: &[&str], has_active_lga: bool) -> RowShape {
    let pu_index = tokens.len().saturating_sub(2);
    if tokens.len() < 2 || !is_pu_count(tokens[pu_index]) {
        return RowShape::Unrecognized;
    }

    match first_code(tokens, pu_index) {
        None if has_active_lga => RowShape::WardOnly {
            ward: join(&tokens[..pu_index]),
        },
        None => RowShape::Unrecognized,
        Some(lga_code) => RowShape::LgaWithWard {
            lga: lga_name(tokens, lga_code),
            ward: join(&tokens[lga_code + 1..pu_index]),
        },
    }
}

fn first_code(tokens: &[&str], end: usize) -> Option<usize> {
    tokens[..end].iter().position(|token| is_row_code(token))
}

fn lga_name(tokens: &[&str], lga_code: usize) -> LgaName {
    if lga_code == 0 {
        LgaName::FromFragments
    } else {
        LgaName::Inline(join(&tokens[..lga_code]))
    }
}

fn join(tokens: &[&str]) -> String {
    normalize_name(&tokens.join(" "))
}

/// Returns `true` if the line contains a standalone two-digit number, so it
/// cannot be the continuation of a wrapped ward name.
pub fn looks_like_new_row(line: &str) -> bool {
    PATTERNS.standalone_code.is_match(line)
}

/// Returns `true` if the line starts with a row code, i.e. an LGA row whose
/// name was wrapped onto the lines above.
pub fn starts_with_code(line: &str) -> bool {
    line.split_whitespace().next().is_some_and(is_row_code)
}

/// Short, all-caps, punctuation-light lines are LGA name fragments
/// (e.g. `"ISIALA NGWA"` followed by `"NORTH"`).
pub fn looks_like_lga_fragment(line: &str) -> bool {
    line.chars().count() <= MAX_LGA_FRAGMENT_LEN
        && PATTERNS.fragment_chars.is_match(line)
        && !PATTERNS.trailing_code.is_match(line)
}
