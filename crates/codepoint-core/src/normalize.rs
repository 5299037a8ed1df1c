//! Pre-indexing normalization.

/// Lower-cases ASCII letters and keeps only ASCII letters and digits.
///
/// Case folding is ASCII-only and happens before filtering, so non-ASCII
/// letters are dropped rather than folded (`'İ'` does not become `'i'`).
/// The transform is lossy.
///
/// ```
/// assert_eq!(codepoint_core::normalize("Hello, World! 123"), "helloworld123");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_alphanumeric)
        .collect()
}
