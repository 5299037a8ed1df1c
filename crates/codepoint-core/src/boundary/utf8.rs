//! Boundary operations over UTF-8 text.

use crate::error::{BoundaryError, BoundaryResult};

/// Returns the first scalar value of `text`.
pub fn first_scalar_value(text: &str) -> BoundaryResult<char> {
    text.chars().next().ok_or_else(|| {
        tracing::trace!(operation = "first_scalar_value", "empty input");
        BoundaryError::empty("first_scalar_value")
    })
}

/// Returns the last scalar value of `text`.
///
/// Used by edge insertion to pick the key character of a new edge.
pub fn last_scalar_value(text: &str) -> BoundaryResult<char> {
    text.chars().next_back().ok_or_else(|| {
        tracing::trace!(operation = "last_scalar_value", "empty input");
        BoundaryError::empty("last_scalar_value")
    })
}

/// Returns `text` without its final scalar value.
///
/// Empty input and input holding exactly one scalar value (of any byte width)
/// yield `""`.
pub fn remove_last_scalar_value(text: &str) -> &str {
    match text.char_indices().next_back() {
        Some((start, _)) => &text[..start],
        None => "",
    }
}

/// Returns `text` without its leading scalar value.
///
/// This is `&text[1..]` for ASCII, but never splits a multi-byte scalar value.
pub fn remove_first_scalar_value(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.as_str()
}

/// [`remove_last_scalar_value`] for callers holding a possibly absent string.
pub fn remove_last_scalar_value_opt(text: Option<&str>) -> &str {
    text.map_or("", remove_last_scalar_value)
}

/// [`remove_first_scalar_value`] for callers holding a possibly absent string.
pub fn remove_first_scalar_value_opt(text: Option<&str>) -> &str {
    text.map_or("", remove_first_scalar_value)
}

/// Number of scalar values in `text`.
pub fn scalar_len(text: &str) -> usize {
    text.chars().count()
}
