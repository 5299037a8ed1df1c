//! First/last scalar value extraction and removal.
//!
//! Edge labels in a suffix tree are consumed one logical character at a time.
//! A logical character is one Unicode scalar value, which the storage encoding
//! may spread over several units:
//!
//! | Encoding | Units per scalar value | Module |
//! |----------|------------------------|--------|
//! | UTF-8 (`&str`) | 1–4 bytes | [`utf8`] |
//! | UTF-16 (`&[u16]`) | 1–2 code units | [`utf16`] |
//!
//! Both modules expose the same operations with the same contract:
//!
//! - `first_scalar_value` / `last_scalar_value` fail with
//!   [`BoundaryError::InvalidArgument`](crate::BoundaryError::InvalidArgument)
//!   on empty input.
//! - `remove_first_scalar_value` / `remove_last_scalar_value` never fail. Empty
//!   input and single-character input both yield an empty slice.
//! - Removal returns a sub-slice of the input; nothing is allocated.

pub mod utf16;
pub mod utf8;
