//! Name and key normalization shared by the extractor and validation.

/// Collapses whitespace runs to a single space and trims both ends.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
///
/// # Examples
///
/// ```
/// use ward_hierarchy_core::normalize_name;
///
/// assert_eq!(normalize_name("  Ojodu \t Ward   I "), "Ojodu Ward I");
/// assert_eq!(normalize_name(&normalize_name(" a  b ")), "a b");
/// ```
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes a state or LGA key: [`normalize_name`] then uppercase.
///
/// # Examples
///
/// ```
/// use ward_hierarchy_core::normalize_key;
///
/// assert_eq!(normalize_key("Cross  River"), "CROSS RIVER");
/// ```
pub fn normalize_key(raw: &str) -> String {
    normalize_name(raw).to_uppercase()
}

/// Returns `true` when `key` is already in [`normalize_key`] form.
pub fn is_normalized_key(key: &str) -> bool {
    normalize_key(key) == key
}
