mod chunk;
mod delta;
mod types;

pub use chunk::Chunk;
pub use delta::Delta;
pub use types::*;

use crate::algorithm::Change;
use crate::error::{PatchError, PatchResult};
use std::fmt::Debug;
use tracing::{debug, warn};

/// An ordered list of deltas describing how to turn one sequence into
/// another.
///
/// Deltas are sorted by original position and never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch<T> {
    deltas: Vec<Delta<T>>,
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch { deltas: Vec::new() }
    }
}

impl<T> Patch<T> {
    /// Wraps deltas built elsewhere, checking that they are sorted and do
    /// not overlap in either sequence.
    pub fn from_deltas(deltas: Vec<Delta<T>>) -> PatchResult<Self> {
        if let Some(delta) = deltas
            .iter()
            .find(|d| d.original().end().is_none() || d.revised().end().is_none())
        {
            return Err(PatchError::InvalidInput(format!(
                "{} runs past the end of any sequence",
                delta
            )));
        }
        for pair in deltas.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.original().range().end > b.original().position()
                || a.revised().range().end > b.revised().position()
            {
                return Err(PatchError::InvalidInput(format!(
                    "{} must start after {} ends",
                    b, a
                )));
            }
        }
        Ok(Patch { deltas })
    }

    pub fn deltas(&self) -> &[Delta<T>] {
        &self.deltas
    }

    pub fn into_deltas(self) -> Vec<Delta<T>> {
        self.deltas
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }
}

impl<T: Clone> Patch<T> {
    /// Builds a patch from the output of a diff algorithm, copying the
    /// affected elements out of both sequences.
    pub fn generate(original: &[T], revised: &[T], changes: &[Change]) -> PatchResult<Self> {
        let mut deltas = Vec::with_capacity(changes.len());
        for change in changes {
            if change.original_start > change.original_end
                || change.original_end > original.len()
                || change.revised_start > change.revised_end
                || change.revised_end > revised.len()
            {
                return Err(PatchError::InvalidInput(format!(
                    "change {:?} does not fit sequences of length {} and {}",
                    change,
                    original.len(),
                    revised.len()
                )));
            }
            let orig = Chunk::slice(original, change.original_start, change.original_end);
            let rev = Chunk::slice(revised, change.revised_start, change.revised_end);
            deltas.push(Delta::new(change.kind, orig, rev)?);
        }
        Patch::from_deltas(deltas)
    }
}

impl<T: Clone + PartialEq + Debug> Patch<T> {
    /// Applies every delta to a copy of `target` and returns the result.
    /// `target` itself is never modified.
    pub fn apply_to(&self, target: &[T]) -> PatchResult<Vec<T>> {
        let mut result = target.to_vec();
        self.apply_in_place(&mut result)?;
        Ok(result)
    }

    /// Applies the deltas directly to `target`, last one first so earlier
    /// positions stay valid.
    ///
    /// There is no rollback: if a delta fails, the ones after it in the
    /// patch have already been applied. Use [`Patch::apply_to`] to work on a
    /// copy instead.
    pub fn apply_in_place(&self, target: &mut Vec<T>) -> PatchResult<()> {
        for delta in self.deltas.iter().rev() {
            if let Err(e) = delta.apply_to(target) {
                warn!(delta = %delta, error = %e, "patch apply failed");
                return Err(e);
            }
        }
        debug!(deltas = self.deltas.len(), len = target.len(), "patch applied");
        Ok(())
    }

    /// Rebuilds the original sequence from a copy of `target`.
    pub fn restore(&self, target: &[T]) -> PatchResult<Vec<T>> {
        let mut result = target.to_vec();
        self.restore_in_place(&mut result)?;
        Ok(result)
    }

    /// Undoes the deltas directly on `target`, last one first. Same
    /// rollback caveat as [`Patch::apply_in_place`].
    pub fn restore_in_place(&self, target: &mut Vec<T>) -> PatchResult<()> {
        for delta in self.deltas.iter().rev() {
            if let Err(e) = delta.restore(target) {
                warn!(delta = %delta, error = %e, "patch restore failed");
                return Err(e);
            }
        }
        debug!(deltas = self.deltas.len(), len = target.len(), "patch restored");
        Ok(())
    }
}
