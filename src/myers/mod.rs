pub mod types;
pub use types::*;

use crate::algorithm::{Change, DiffAlgorithm, DiffListener, Equalizer, ValueEquality};
use crate::error::{DiffError, DiffResult};
use tracing::{debug, trace};

/// Eugene Myers' greedy O((N+M)·D) differencing algorithm.
///
/// # Examples
///
/// ```
/// use seqdiff::{DeltaType, DiffAlgorithm, MyersDiff};
///
/// let old = vec!["a", "b", "c"];
/// let new = vec!["a", "z", "c"];
/// let changes = MyersDiff::new().diff(&old, &new, None).unwrap();
/// assert_eq!(changes.len(), 1);
/// assert_eq!(changes[0].kind, DeltaType::Change);
/// assert_eq!((changes[0].original_start, changes[0].original_end), (1, 2));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersDiff<E = ValueEquality> {
    equalizer: E,
}

impl MyersDiff<ValueEquality> {
    /// Compares elements with `PartialEq`.
    pub const fn new() -> Self {
        MyersDiff {
            equalizer: ValueEquality,
        }
    }
}

impl<E> MyersDiff<E> {
    /// Compares elements with a custom relation.
    pub const fn with_equalizer(equalizer: E) -> Self {
        MyersDiff { equalizer }
    }

    /// Finds one shortest path through the edit graph and returns the arena
    /// holding it together with the id of its last node.
    pub fn build_path<T>(
        &self,
        orig: &[T],
        rev: &[T],
        mut listener: Option<&mut dyn DiffListener>,
    ) -> DiffResult<(PathArena, NodeId)>
    where
        E: Equalizer<T>,
    {
        let n = orig.len() as isize;
        let m = rev.len() as isize;

        let max = orig.len() + rev.len() + 1;
        let size = 1 + 2 * max;
        let middle = size / 2;
        let mut diagonal: Vec<Option<NodeId>> = vec![None; size];
        let mut arena = PathArena::with_capacity(2 * max);

        diagonal[middle + 1] = Some(arena.bootstrap());
        for d in 0..max {
            if let Some(l) = listener.as_deref_mut() {
                l.on_step(d, max);
            }
            let di = d as isize;
            let mut k = -di;
            while k <= di {
                let kmiddle = (middle as isize + k) as usize;
                let kplus = kmiddle + 1;
                let kminus = kmiddle - 1;

                let reach = |cell: Option<NodeId>| cell.map(|id| arena.get(id).i);
                let (mut i, prev) = if k == -di
                    || (k != di && reach(diagonal[kminus]) < reach(diagonal[kplus]))
                {
                    (reach(diagonal[kplus]).unwrap_or(0), diagonal[kplus])
                } else {
                    (reach(diagonal[kminus]).unwrap_or(0) + 1, diagonal[kminus])
                };

                diagonal[kminus] = None;

                let mut j = i - k;
                let mut node = arena.edit(i, j, prev);

                while i < n
                    && j < m
                    && self.equalizer.test(&orig[i as usize], &rev[j as usize])
                {
                    i += 1;
                    j += 1;
                }

                if i != arena.get(node).i {
                    node = arena.snake(i, j, node);
                }

                diagonal[kmiddle] = Some(node);

                if i >= n && j >= m {
                    trace!(distance = d, nodes = arena.len(), "reached end of edit graph");
                    return Ok((arena, node));
                }
                k += 2;
            }
            diagonal[middle + d - 1] = None;
            if arena.should_compact() {
                arena.compact(&mut diagonal);
                trace!(distance = d, live = arena.len(), "compacted path arena");
            }
        }

        Err(DiffError::PathNotFound { bound: max })
    }
}

/// Turns a path found by [`MyersDiff::build_path`] into edit records,
/// ordered by ascending original position.
pub fn build_revision(arena: &PathArena, end: NodeId) -> DiffResult<Vec<Change>> {
    let mut changes = Vec::new();
    let mut path = Some(end);
    if arena.get(end).snake {
        path = arena.get(end).prev;
    }

    while let Some(id) = path {
        let node = arena.get(id);
        let anchor = match node.prev {
            Some(prev) if arena.get(prev).j >= 0 => arena.get(prev),
            _ => break,
        };
        if node.snake {
            return Err(DiffError::CorruptPath {
                i: node.i,
                j: node.j,
            });
        }

        let (i, j) = (node.i as usize, node.j as usize);
        let (ianchor, janchor) = (anchor.i as usize, anchor.j as usize);
        changes.push(Change::new(ianchor, i, janchor, j));

        path = node.prev;
        if anchor.snake {
            path = anchor.prev;
        }
    }

    changes.reverse();
    Ok(changes)
}

impl<T, E: Equalizer<T>> DiffAlgorithm<T> for MyersDiff<E> {
    fn diff(
        &self,
        original: &[T],
        revised: &[T],
        mut listener: Option<&mut dyn DiffListener>,
    ) -> DiffResult<Vec<Change>> {
        if let Some(l) = listener.as_deref_mut() {
            l.on_start();
        }
        let reborrowed = listener.as_deref_mut().map(|l| l as &mut dyn DiffListener);
        let result = self
            .build_path(original, revised, reborrowed)
            .and_then(|(arena, end)| build_revision(&arena, end));
        // fires on failure too
        if let Some(l) = listener {
            l.on_end();
        }
        let changes = result?;
        debug!(
            original = original.len(),
            revised = revised.len(),
            changes = changes.len(),
            "myers diff complete"
        );
        Ok(changes)
    }
}
