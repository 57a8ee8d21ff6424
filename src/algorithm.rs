//! Seams shared by every diff algorithm: the equivalence relation, the
//! progress listener and the raw edit records an algorithm hands to
//! [`Patch::generate`](crate::patch::Patch::generate).

use crate::error::DiffResult;
use crate::patch::DeltaType;

/// Decides whether two elements count as equal for diffing purposes.
///
/// Any `Fn(&T, &T) -> bool` is an equalizer, so closures can be passed
/// directly. The relation must not change during a single diff call.
pub trait Equalizer<T> {
    fn test(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Equalizer<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn test(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// The default relation: plain `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueEquality;

impl<T: PartialEq> Equalizer<T> for ValueEquality {
    fn test(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Observer for long-running diffs.
///
/// Called synchronously on the diffing thread. It only observes: it cannot
/// cancel the search or change its result.
pub trait DiffListener {
    fn on_start(&mut self) {}

    /// `current` is the edit distance being explored, `max` the upper bound.
    fn on_step(&mut self, _current: usize, _max: usize) {}

    fn on_end(&mut self) {}
}

/// A primitive edit: `original[original_start..original_end]` becomes
/// `revised[revised_start..revised_end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub kind: DeltaType,
    pub original_start: usize,
    pub original_end: usize,
    pub revised_start: usize,
    pub revised_end: usize,
}

impl Change {
    /// Builds a change, deriving its kind from which range is empty.
    pub fn new(
        original_start: usize,
        original_end: usize,
        revised_start: usize,
        revised_end: usize,
    ) -> Self {
        let kind = if original_start == original_end {
            DeltaType::Insert
        } else if revised_start == revised_end {
            DeltaType::Delete
        } else {
            DeltaType::Change
        };
        Change {
            kind,
            original_start,
            original_end,
            revised_start,
            revised_end,
        }
    }
}

/// A diff algorithm producing ordered [`Change`] records.
pub trait DiffAlgorithm<T> {
    /// Computes the changes turning `original` into `revised`, sorted by
    /// ascending original position.
    fn diff(
        &self,
        original: &[T],
        revised: &[T],
        listener: Option<&mut dyn DiffListener>,
    ) -> DiffResult<Vec<Change>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_kind_from_ranges() {
        assert_eq!(Change::new(2, 2, 1, 3).kind, DeltaType::Insert);
        assert_eq!(Change::new(0, 2, 4, 4).kind, DeltaType::Delete);
        assert_eq!(Change::new(1, 2, 1, 2).kind, DeltaType::Change);
    }

    #[test]
    fn test_closure_equalizer() {
        let eq = |a: &String, b: &String| a.eq_ignore_ascii_case(b);
        assert!(eq.test(&"Foo".to_string(), &"fOO".to_string()));
        assert!(!ValueEquality.test(&"Foo".to_string(), &"fOO".to_string()));
    }
}
