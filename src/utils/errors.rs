//! Error types for constraint manipulation.
//!
//! Every fallible operation in the crate reports one of four failure kinds:
//! a bad argument, an out-of-range dimension index, an operation attempted
//! in the wrong state, or a failure to grow row storage.

use crate::polyhedral::space::DimType;
use std::collections::TryReserveError;
use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Error, Debug)]
pub enum PolyError {
    /// Absent or incompatible operand, e.g. mismatched spaces.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A (type, position) pair past the number of dimensions of that type.
    #[error("Position {pos} out of range for {dim_type} dimensions (have {n})")]
    OutOfRange {
        /// Dimension type that was indexed
        dim_type: DimType,
        /// Requested local position
        pos: usize,
        /// Number of dimensions of that type
        n: usize,
    },

    /// Operation not legal in the current state of its operand.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Row storage could not be grown.
    #[error("Allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}

impl PolyError {
    /// Shorthand for [`PolyError::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PolyError::InvalidArgument(message.into())
    }

    /// Shorthand for [`PolyError::InvalidState`].
    pub fn invalid_state(message: impl Into<String>) -> Self {
        PolyError::InvalidState(message.into())
    }

    /// Check that `pos` addresses one of `n` dimensions of `dim_type`.
    pub fn check_pos(dim_type: DimType, pos: usize, n: usize) -> PolyResult<()> {
        if pos < n {
            Ok(())
        } else {
            Err(PolyError::OutOfRange { dim_type, pos, n })
        }
    }
}

/// Result type using PolyError.
pub type PolyResult<T> = Result<T, PolyError>;
