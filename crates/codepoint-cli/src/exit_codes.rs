//! Exit codes for the `codepoint` binary.
//! These codes are part of the public contract; scripts branch on them.

pub const SUCCESS: i32 = 0;
pub const INVALID_INPUT: i32 = 1; // Boundary operation rejected the input (empty, unpaired surrogate)
pub const INTERNAL_ERROR: i32 = 2; // Usage, I/O or parse failure
