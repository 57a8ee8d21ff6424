use super::{Chunk, DeltaType};
use crate::error::{PatchError, PatchResult};
use std::fmt::{self, Debug};

/// One edit operation, linking a chunk of the original sequence to the
/// chunk of the revised sequence that replaces it.
///
/// `Insert` always has an empty original chunk, `Delete` an empty revised
/// chunk, and `Change` has both non-empty. [`Delta::new`] enforces this for
/// deltas built by hand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Delta<T> {
    Insert {
        original: Chunk<T>,
        revised: Chunk<T>,
    },
    Delete {
        original: Chunk<T>,
        revised: Chunk<T>,
    },
    Change {
        original: Chunk<T>,
        revised: Chunk<T>,
    },
}

impl<T> Delta<T> {
    /// Builds a delta of the given kind, rejecting chunk shapes that do not
    /// match it.
    pub fn new(kind: DeltaType, original: Chunk<T>, revised: Chunk<T>) -> PatchResult<Self> {
        let shape_ok = match kind {
            DeltaType::Insert => original.is_empty() && !revised.is_empty(),
            DeltaType::Delete => !original.is_empty() && revised.is_empty(),
            DeltaType::Change => !original.is_empty() && !revised.is_empty(),
        };
        if !shape_ok {
            return Err(PatchError::InvalidInput(format!(
                "{} delta cannot have {} original and {} revised elements",
                kind,
                original.len(),
                revised.len()
            )));
        }
        if original.end().is_none() || revised.end().is_none() {
            return Err(PatchError::InvalidInput(format!(
                "{} delta chunks at {} and {} run past the end of any sequence",
                kind,
                original.position(),
                revised.position()
            )));
        }
        Ok(match kind {
            DeltaType::Insert => Delta::Insert { original, revised },
            DeltaType::Delete => Delta::Delete { original, revised },
            DeltaType::Change => Delta::Change { original, revised },
        })
    }

    pub fn delta_type(&self) -> DeltaType {
        match self {
            Delta::Insert { .. } => DeltaType::Insert,
            Delta::Delete { .. } => DeltaType::Delete,
            Delta::Change { .. } => DeltaType::Change,
        }
    }

    /// The chunk describing the original sequence.
    pub fn original(&self) -> &Chunk<T> {
        match self {
            Delta::Insert { original, .. }
            | Delta::Delete { original, .. }
            | Delta::Change { original, .. } => original,
        }
    }

    /// The chunk describing the revised sequence.
    pub fn revised(&self) -> &Chunk<T> {
        match self {
            Delta::Insert { revised, .. }
            | Delta::Delete { revised, .. }
            | Delta::Change { revised, .. } => revised,
        }
    }

    pub fn into_chunks(self) -> (Chunk<T>, Chunk<T>) {
        match self {
            Delta::Insert { original, revised }
            | Delta::Delete { original, revised }
            | Delta::Change { original, revised } => (original, revised),
        }
    }

    fn labelled(&self, err: PatchError) -> PatchError {
        match err {
            PatchError::Conflict {
                expected, actual, ..
            } => PatchError::Conflict {
                delta: self.to_string(),
                expected,
                actual,
            },
            other => other,
        }
    }
}

impl<T: Clone + PartialEq + Debug> Delta<T> {
    /// Checks that this delta can be applied to `target`.
    pub fn verify(&self, target: &[T]) -> PatchResult<()> {
        self.original()
            .verify(target)
            .map_err(|e| self.labelled(e))
    }

    /// Applies this delta to `target`. Nothing is touched if verification
    /// fails.
    pub fn apply_to(&self, target: &mut Vec<T>) -> PatchResult<()> {
        self.verify(target)?;
        match self {
            Delta::Insert { original, revised } => {
                let at = original.position();
                target.splice(at..at, revised.elements().iter().cloned());
            }
            Delta::Delete { original, .. } => {
                target.drain(original.range());
            }
            Delta::Change { original, revised } => {
                target.splice(original.range(), revised.elements().iter().cloned());
            }
        }
        Ok(())
    }

    /// Undoes this delta on a sequence it was applied to. Nothing is touched
    /// if the revised chunk does not match `target`.
    ///
    /// Positions come from the revised chunk: deltas further along the
    /// sequence are expected to be restored first.
    pub fn restore(&self, target: &mut Vec<T>) -> PatchResult<()> {
        self.revised()
            .verify(target)
            .map_err(|e| self.labelled(e))?;
        match self {
            Delta::Insert { revised, .. } => {
                target.drain(revised.range());
            }
            Delta::Delete { original, revised } => {
                let at = revised.position();
                target.splice(at..at, original.elements().iter().cloned());
            }
            Delta::Change { original, revised } => {
                target.splice(revised.range(), original.elements().iter().cloned());
            }
        }
        Ok(())
    }
}

impl<T> fmt::Display for Delta<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (original, revised) = (self.original().range(), self.revised().range());
        write!(
            f,
            "{} delta [original {}..{}, revised {}..{}]",
            self.delta_type(),
            original.start,
            original.end,
            revised.start,
            revised.end
        )
    }
}
