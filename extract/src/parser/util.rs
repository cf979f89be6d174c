//! Token predicates shared by the classifier, oracle and splitter.

/// Returns `true` if `token` is a two-digit row code (`"01"`, `"15"`).
pub fn is_row_code(token: &str) -> bool {
    token.len() == 2 && token.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if `text` is a non-empty run of ASCII digits.
pub fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if `token` could be a polling-unit count (1–3 digits).
pub fn is_pu_count(token: &str) -> bool {
    (1..=3).contains(&token.len()) && is_digits(token)
}

/// Returns `true` for a line with at least two tokens ending in a row code,
/// the shape no header, footer or bare name ever has.
pub fn is_unambiguous_data_row(line: &str) -> bool {
    let mut tokens = line.split_whitespace();
    let Some(last) = tokens.next_back() else {
        return false;
    };
    tokens.next().is_some() && is_row_code(last)
}
