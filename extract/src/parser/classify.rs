//! Line classification as an ordered rule table.
//!
//! Each rule inspects one line (plus read-only lookahead) and either claims
//! it or passes. Rules run in precedence order; the first claim wins and
//! unclaimed lines are data rows.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use ward_hierarchy_core::normalize_key;

use super::lookahead::lookahead;
use super::states::{FCT_KEY, is_known_state};
use super::util::is_digits;

/// Category of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// `-- N of M --` page footer.
    Footer,
    /// Digits only; resolved by the lookahead oracle.
    Numeral,
    /// Introduces the `NO OF PU` column.
    ModeMarker,
    /// Column header or label.
    Noise,
    /// Opens a state section; carries the normalized state key.
    StateHeader(String),
    /// Candidate LGA/ward row.
    DataRow,
}

/// Read-only view of the line being classified.
#[derive(Debug)]
pub struct LineContext<'a, S> {
    pub lines: &'a [S],
    pub index: usize,
    /// The current line, whitespace-collapsed.
    pub text: &'a str,
    pub window: usize,
    /// The previous line ended a page (footer or page number), or the scan
    /// has just started.
    pub prev_was_page_break: bool,
}

type Rule<S> = fn(&LineContext<'_, S>, &str) -> Option<LineClass>;

/// Header and column-label lines found in the table layouts.
const NOISE_LINES: [&str; 12] = [
    "LGA NAME LGA",
    "LGA NAME",
    "CODE",
    "WARD NAME WARD",
    "WARD NAME",
    "WARD",
    "NO",
    "OF",
    "PU",
    "WARD NAME NO",
    "OF PU",
    "OF PU WARD CODE",
];

static PATTERNS: LazyLock<LinePatterns> = LazyLock::new(LinePatterns::new);

struct LinePatterns {
    footer: Regex,
    state_suffix: Regex,
}

impl LinePatterns {
    fn new() -> Self {
        // Patterns run against uppercased, whitespace-collapsed lines.
        Self {
            // -- 12 OF 230 --
            footer: Regex::new(r"^--\s*\d+\s+OF\s+\d+\s*--$").expect("static regex must compile"),
            // KANO STATE, CROSS RIVER STATE
            state_suffix: Regex::new(r"^([A-Z][A-Z ]+?) STATE$").expect("static regex must compile"),
        }
    }
}

/// Classifies one line. `upper` rules see the line uppercased.
///
/// # Examples
///
/// ```
/// use ward_hierarchy_extract::parser::classify::{LineClass, LineContext, classify_line};
///
/// let lines = ["-- 12 of 230 --", "12", "LAGOS STATE"];
/// let ctx = |index: usize| LineContext {
///     lines: &lines[..],
///     index,
///     text: lines[index],
///     window: 8,
///     prev_was_page_break: false,
/// };
/// assert_eq!(classify_line(&ctx(0)), LineClass::Footer);
/// assert_eq!(classify_line(&ctx(1)), LineClass::Numeral);
/// assert_eq!(classify_line(&ctx(2)), LineClass::StateHeader("LAGOS".to_string()));
/// ```
pub fn classify_line<S: AsRef<str>>(ctx: &LineContext<'_, S>) -> LineClass {
    let upper = normalize_key(ctx.text);
    let rules: [(&str, Rule<S>); 5] = [
        ("footer", footer_rule),
        ("numeral", numeral_rule),
        ("mode_marker", mode_marker_rule),
        ("noise", noise_rule),
        ("state_header", state_header_rule),
    ];

    rules
        .iter()
        .find_map(|(name, rule)| {
            let class = rule(ctx, &upper)?;
            trace!(index = ctx.index, rule = *name, "Line claimed");
            Some(class)
        })
        .unwrap_or(LineClass::DataRow)
}

fn footer_rule<S>(_ctx: &LineContext<'_, S>, upper: &str) -> Option<LineClass> {
    is_footer(upper).then_some(LineClass::Footer)
}

fn numeral_rule<S>(_ctx: &LineContext<'_, S>, upper: &str) -> Option<LineClass> {
    is_digits(upper).then_some(LineClass::Numeral)
}

fn mode_marker_rule<S>(_ctx: &LineContext<'_, S>, upper: &str) -> Option<LineClass> {
    is_mode_marker(upper).then_some(LineClass::ModeMarker)
}

fn noise_rule<S>(_ctx: &LineContext<'_, S>, upper: &str) -> Option<LineClass> {
    is_noise(upper).then_some(LineClass::Noise)
}

fn state_header_rule<S: AsRef<str>>(ctx: &LineContext<'_, S>, upper: &str) -> Option<LineClass> {
    if let Some(key) = explicit_state_header(upper) {
        return Some(LineClass::StateHeader(key));
    }

    // A bare name such as "CROSS RIVER" is only a header at a page boundary
    // or directly above the table's column headers.
    if !is_known_state(upper) {
        return None;
    }
    let allowed = ctx.prev_was_page_break || lookahead(ctx.lines, ctx.index, ctx.window).is_header();
    allowed.then(|| LineClass::StateHeader(upper.to_string()))
}

/// Returns `true` for `-- N OF M --` page footers. Expects an uppercased line.
pub fn is_footer(line: &str) -> bool {
    PATTERNS.footer.is_match(line.trim())
}

/// Returns `true` for lines announcing the polling-unit count column.
pub fn is_mode_marker(upper: &str) -> bool {
    upper == "PU" || upper.contains("NO OF PU")
}

/// Returns `true` for table headers and column labels.
pub fn is_noise(upper: &str) -> bool {
    NOISE_LINES.contains(&upper)
}

/// Matches the unconditional header forms: `<NAME> STATE`,
/// `FEDERAL CAPITAL TERRITORY` and `FCT`.
pub fn explicit_state_header(upper: &str) -> Option<String> {
    if upper == "FEDERAL CAPITAL TERRITORY" || upper == FCT_KEY {
        return Some(FCT_KEY.to_string());
    }
    PATTERNS
        .state_suffix
        .captures(upper)
        .and_then(|caps| caps.get(1))
        .map(|name| normalize_key(name.as_str()))
        .filter(|key| !key.is_empty())
}
