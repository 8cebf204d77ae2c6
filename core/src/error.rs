//! Common error types for trellis.

use crate::NodeKey;
use thiserror::Error;

/// Errors that can occur during tree mutations.
///
/// Only structural conflicts surface as errors; recoverable caller mistakes
/// (moving an unmoveable pair, touching an unknown key) are silent no-ops
/// reported through the diagnostic channel instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TreeError {
    /// An appended collection contains a key that is already indexed.
    #[error("Duplicate node: {0} already exists in the index")]
    DuplicateNode(NodeKey),

    /// The append target does not exist in the index.
    #[error("Append target not found: {0}")]
    TargetNotFound(NodeKey),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
