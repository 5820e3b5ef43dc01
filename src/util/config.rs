//! Configuration file parsing utilities.
//!
//! Helpers for `key = value` files with comment skipping and key normalization.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Drop a trailing ` # comment` from a value.
///
/// Inputs:
/// - `value`: Raw value text.
///
/// Output:
/// - Value up to the first `#` that follows whitespace, trimmed.
///
/// Details:
/// - A `#` glued to text (as in `https://host/#frag`) is kept.
#[must_use]
pub fn strip_inline_comment(value: &str) -> &str {
    let bytes = value.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'#' && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return value[..i].trim();
        }
    }
    value.trim()
}

/// What: Normalize a settings key.
///
/// Inputs:
/// - `raw`: Key as written.
///
/// Output:
/// - Lowercase key with `.`, `-` and spaces mapped to `_`.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` with a normalized key and comment-stripped value; `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (key, value) = line.trim().split_once('=')?;
    let key = normalize_key(key);
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(value).to_string()))
}
