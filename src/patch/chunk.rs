use crate::error::{PatchError, PatchResult};
use std::fmt::Debug;

/// A contiguous slice of one sequence, remembered by position and by value.
///
/// The elements are an owned copy, so a chunk stays valid while the
/// sequence it came from is rewritten by a patch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chunk<T> {
    position: usize,
    elements: Vec<T>,
}

impl<T> Chunk<T> {
    pub fn new(position: usize, elements: Vec<T>) -> Self {
        Chunk { position, elements }
    }

    /// Index of the first element in the source sequence.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Index of the last element, or `None` for an empty chunk.
    pub fn last(&self) -> Option<usize> {
        if self.elements.is_empty() {
            None
        } else {
            self.position.checked_add(self.elements.len() - 1)
        }
    }

    /// One past the last index, or `None` if that does not fit in a `usize`.
    pub fn end(&self) -> Option<usize> {
        self.position.checked_add(self.elements.len())
    }

    /// Range this chunk covers in its source sequence. Saturates for chunks
    /// whose end overflows; [`Chunk::verify`] rejects those.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.position..self.position.saturating_add(self.elements.len())
    }
}

impl<T: Clone> Chunk<T> {
    /// Copies `source[start..end]` into a new chunk.
    pub(crate) fn slice(source: &[T], start: usize, end: usize) -> Self {
        Chunk::new(start, source[start..end].to_vec())
    }
}

impl<T: PartialEq + Debug> Chunk<T> {
    /// Checks that `target` holds exactly this chunk's elements at its
    /// position. Uses `PartialEq`, not whatever relation produced the diff.
    pub fn verify(&self, target: &[T]) -> PatchResult<()> {
        let end = match self.end() {
            Some(end) if end <= target.len() => end,
            _ => {
                return Err(PatchError::OutOfBounds {
                    position: self.position,
                    len: self.elements.len(),
                    target_len: target.len(),
                })
            }
        };
        let actual = &target[self.position..end];
        if actual != self.elements.as_slice() {
            return Err(PatchError::Conflict {
                delta: format!("chunk at {}", self.position),
                expected: format!("{:?}", self.elements),
                actual: format!("{:?}", actual),
            });
        }
        Ok(())
    }
}
