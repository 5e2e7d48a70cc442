//! Error types for matrix operations.

use thiserror::Error;

/// Errors that can occur when building a transform.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// The rotation axis is too short to normalize.
    #[error("degenerate rotation axis: length is below 1e-6")]
    DegenerateAxis,
}
