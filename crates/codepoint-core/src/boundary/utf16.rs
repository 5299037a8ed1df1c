//! Boundary operations over UTF-16 code units.
//!
//! A supplementary-plane scalar value is stored as a high surrogate
//! (`0xD800..=0xDBFF`) followed by a low surrogate (`0xDC00..=0xDFFF`). Both
//! halves are checked before two units are treated as one scalar value.
//!
//! # Malformed input
//!
//! A surrogate without its partner at the inspected edge is a one-unit
//! logical character for removal (the same one-unit-per-error rule as
//! [`char::decode_utf16`]), so removal always makes progress. Extraction
//! reports it as [`BoundaryError::UnpairedSurrogate`].

use std::ops::RangeInclusive;

use crate::error::{BoundaryError, BoundaryResult};

const HIGH_SURROGATES: RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: RangeInclusive<u16> = 0xDC00..=0xDFFF;

fn is_pair(high: u16, low: u16) -> bool {
    HIGH_SURROGATES.contains(&high) && LOW_SURROGATES.contains(&low)
}

/// Units taken by the leading scalar value (0 for empty input).
fn leading_width(units: &[u16]) -> usize {
    match units {
        [] => 0,
        [high, low, ..] if is_pair(*high, *low) => 2,
        _ => 1,
    }
}

/// Units taken by the trailing scalar value (0 for empty input).
fn trailing_width(units: &[u16]) -> usize {
    match units {
        [] => 0,
        [.., high, low] if is_pair(*high, *low) => 2,
        _ => 1,
    }
}

fn decode_at(units: &[u16], start: usize, operation: &'static str) -> BoundaryResult<char> {
    match char::decode_utf16(units.iter().copied()).next() {
        Some(Ok(c)) => Ok(c),
        Some(Err(err)) => {
            let unit = err.unpaired_surrogate();
            tracing::trace!(operation, index = start, unit, "unpaired surrogate");
            Err(BoundaryError::UnpairedSurrogate { index: start, unit })
        }
        None => Err(BoundaryError::empty(operation)),
    }
}

/// Returns the first scalar value of `units`.
pub fn first_scalar_value(units: &[u16]) -> BoundaryResult<char> {
    if units.is_empty() {
        tracing::trace!(operation = "first_scalar_value", "empty input");
        return Err(BoundaryError::empty("first_scalar_value"));
    }
    let width = leading_width(units);
    decode_at(&units[..width], 0, "first_scalar_value")
}

/// Returns the last scalar value of `units`.
pub fn last_scalar_value(units: &[u16]) -> BoundaryResult<char> {
    if units.is_empty() {
        tracing::trace!(operation = "last_scalar_value", "empty input");
        return Err(BoundaryError::empty("last_scalar_value"));
    }
    let start = units.len() - trailing_width(units);
    decode_at(&units[start..], start, "last_scalar_value")
}

/// Returns `units` without the units encoding the final scalar value.
pub fn remove_last_scalar_value(units: &[u16]) -> &[u16] {
    let end = units.len() - trailing_width(units);
    &units[..end]
}

/// Returns `units` without the units encoding the leading scalar value.
pub fn remove_first_scalar_value(units: &[u16]) -> &[u16] {
    &units[leading_width(units)..]
}

/// Number of scalar values in `units`. Each unpaired surrogate counts as one.
pub fn scalar_len(units: &[u16]) -> usize {
    char::decode_utf16(units.iter().copied()).count()
}
