//! Error types for diffing and patching.

use thiserror::Error;

/// Errors raised while computing a diff.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The search exhausted its bound without reaching the end of both
    /// sequences. A correct search never gets here.
    #[error("could not find a diff path within {bound} steps")]
    PathNotFound { bound: usize },

    /// A snake node showed up where the builder expected an edit node.
    #[error("bad diff path: found snake at ({i}, {j}) when looking for an edit")]
    CorruptPath { i: isize, j: isize },

    /// The algorithm's changes could not be turned into a patch.
    #[error(transparent)]
    Patch(#[from] PatchError),
}

/// Errors raised while applying or restoring a patch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// The target does not hold what the delta expects at its position.
    #[error("conflict applying {delta}: expected {expected}, found {actual}")]
    Conflict {
        delta: String,
        expected: String,
        actual: String,
    },

    /// The chunk reaches past the end of the target.
    #[error("chunk at {position} with {len} elements is out of bounds for target of length {target_len}")]
    OutOfBounds {
        position: usize,
        len: usize,
        target_len: usize,
    },

    /// A delta or patch was built from inconsistent parts.
    #[error("invalid patch: {0}")]
    InvalidInput(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;

/// Convenience alias for patch results.
pub type PatchResult<T> = Result<T, PatchError>;
