//! Brute-force substring oracle for validating text indexes.
//!
//! Enumerates every contiguous substring of a text, with boundaries counted in
//! scalar values. This is O(n³) and exists only to check that an index built
//! over the same text (e.g. a suffix tree) finds everything it should. It is
//! compiled only for this crate's own tests or with the `test-support`
//! feature.
//!
//! ```
//! use codepoint_core::oracle::{all_substrings, missing_substrings};
//!
//! let text = "abab";
//! assert_eq!(all_substrings(text).len(), 7);
//!
//! // A "naive index" that only knows about prefixes misses most of them.
//! let missing = missing_substrings(text, |s| text.starts_with(s));
//! assert_eq!(missing, vec!["b", "ba", "bab"]);
//! ```

use std::collections::HashSet;

/// Returns the set of all non-empty contiguous substrings of `text`.
///
/// Repeated substrings collapse to one entry; an empty `text` yields an empty
/// set.
pub fn all_substrings(text: &str) -> HashSet<String> {
    let scalars: Vec<char> = text.chars().collect();
    let n = scalars.len();
    let mut out = HashSet::new();

    for len in 1..=n {
        for start in 0..=n - len {
            out.insert(scalars[start..start + len].iter().collect::<String>());
        }
    }

    tracing::debug!(
        scalar_len = n,
        distinct = out.len(),
        upper_bound = max_substring_count(n),
        "enumerated substrings"
    );
    out
}

/// Upper bound on the number of distinct substrings of a text with `n` scalar
/// values: `n * (n + 1) / 2`.
pub fn max_substring_count(n: usize) -> usize {
    n * (n + 1) / 2
}

/// Returns, sorted, every substring of `text` that `contains` rejects.
///
/// `contains` is the lookup of the index under test. An empty result means the
/// index reports every substring of `text`.
pub fn missing_substrings<F>(text: &str, contains: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut missing: Vec<String> = all_substrings(text)
        .into_iter()
        .filter(|s| !contains(s))
        .collect();
    missing.sort();

    if !missing.is_empty() {
        tracing::debug!(missing = missing.len(), "index is missing substrings");
    }
    missing
}
