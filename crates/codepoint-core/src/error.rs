//! Error types for boundary operations.

/// Result alias used by every fallible boundary operation.
pub type BoundaryResult<T> = Result<T, BoundaryError>;

/// Boundary errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundaryError {
    /// Operation needs at least one scalar value but got empty input.
    #[error("invalid argument to {operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: &'static str,
    },

    /// A UTF-16 surrogate without its partner sits at the inspected edge.
    #[error("unpaired surrogate {unit:#06x} at unit index {index}")]
    UnpairedSurrogate { index: usize, unit: u16 },
}

impl BoundaryError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        Self::InvalidArgument {
            operation,
            reason: "input must contain at least one scalar value",
        }
    }
}
