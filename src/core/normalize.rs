//! Canonical single-line form of matched marker content.

/// Normalize raw marker content into the form stored as an entry's default.
///
/// Carriage returns are dropped, newlines become spaces, every run of
/// whitespace collapses to a single space and the result is trimmed.
///
/// # Examples
///
/// ```
/// use ttscan::core::normalize::normalize_content;
///
/// assert_eq!(normalize_content("\n  Hello\r\n   world  "), "Hello world");
/// assert_eq!(normalize_content(""), "");
/// ```
pub fn normalize_content(raw: &str) -> String {
    raw.replace('\r', "")
        .replace('\n', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
