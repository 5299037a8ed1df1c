//! Scalar-value-safe string boundaries for suffix-tree text indexes.
//!
//! Suffix-tree edges are labeled with substrings of arbitrary Unicode input
//! and are consumed one logical character at a time. Slicing storage units
//! naively can split a multi-unit scalar value across two edges. This crate
//! provides the primitives that never do:
//!
//! - First/last scalar value extraction and removal for UTF-8 ([`boundary::utf8`])
//!   and UTF-16 ([`boundary::utf16`]) text
//! - ASCII normalization applied before indexing ([`normalize`])
//! - A brute-force substring oracle for index tests (`oracle`, `test-support` feature)
//!
//! # Quick Start
//!
//! ```
//! use codepoint_core::{last_scalar_value, remove_first_scalar_value, remove_last_scalar_value};
//!
//! let label = "edge\u{1F600}";
//! assert_eq!(last_scalar_value(label)?, '\u{1F600}');
//! assert_eq!(remove_last_scalar_value(label), "edge");
//! assert_eq!(remove_first_scalar_value(label), "dge\u{1F600}");
//! # Ok::<(), codepoint_core::BoundaryError>(())
//! ```
//!
//! # Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `test-support` | Enables `oracle` (substring enumeration, index completeness checks) |

pub mod boundary;
pub mod error;
mod normalize;
#[cfg(any(test, feature = "test-support"))]
pub mod oracle;
#[cfg(test)]
mod test_log;

pub use boundary::utf8::{
    first_scalar_value, last_scalar_value, remove_first_scalar_value,
    remove_first_scalar_value_opt, remove_last_scalar_value, remove_last_scalar_value_opt,
    scalar_len,
};
pub use error::{BoundaryError, BoundaryResult};
pub use normalize::normalize;
