//! Diff arbitrary sequences with Myers' algorithm and replay the result as a
//! verified, reversible patch.
//!
//! ```
//! let old = vec!["A", "B", "C", "A", "B", "B", "A"];
//! let new = vec!["C", "B", "A", "B", "A", "C"];
//!
//! let patch = seqdiff::diff(&old, &new).unwrap();
//! assert_eq!(seqdiff::patch(&old, &patch).unwrap(), new);
//! assert_eq!(seqdiff::unpatch(&new, &patch).unwrap(), old);
//! ```

pub mod algorithm;
pub mod diff;
pub mod error;
pub mod myers;
pub mod patch;

pub use algorithm::{Change, DiffAlgorithm, DiffListener, Equalizer, ValueEquality};
pub use diff::{
    diff, diff_inline, diff_lines, diff_with, diff_with_algorithm, diff_with_listener, patch,
    unpatch,
};
pub use error::{DiffError, DiffResult, PatchError, PatchResult};
pub use myers::MyersDiff;
pub use patch::{Chunk, Delta, DeltaType, Patch};
