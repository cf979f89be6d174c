//! Text preparation before the line scan.
//!
//! PDF text extractors emit `\r\n`, bare `\r` and form feeds at page
//! boundaries, and pad cells with runs of spaces or tabs. The scan expects
//! one non-empty, whitespace-collapsed line per entry.

use ward_hierarchy_core::normalize_name;

/// Default width used when previewing lines.
pub const PREVIEW_WIDTH: usize = 120;

/// Splits raw text into trimmed, whitespace-collapsed, non-empty lines.
///
/// # Examples
///
/// ```
/// use ward_hierarchy_extract::normalize::to_lines;
///
/// let text = "LAGOS STATE\r\n\r\nIKEJA  05\tOJODU 01\x0c-- 1 of 2 --\r";
/// assert_eq!(to_lines(text), ["LAGOS STATE", "IKEJA 05 OJODU 01", "-- 1 of 2 --"]);
/// ```
pub fn to_lines(raw: &str) -> Vec<String> {
    raw.split(['\n', '\r', '\x0c'])
        .map(normalize_name)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Renders the first `count` lines as `"<n>: <text>"`, one-based and
/// truncated to `width` characters.
pub fn preview_lines<S: AsRef<str>>(lines: &[S], count: usize, width: usize) -> Vec<String> {
    lines
        .iter()
        .take(count)
        .enumerate()
        .map(|(i, line)| {
            let text: String = line.as_ref().chars().take(width).collect();
            format!("{}: {text}", i + 1)
        })
        .collect()
}
