//! High level entry points: diff two sequences into a [`Patch`], then patch
//! or unpatch with it.

use crate::algorithm::{DiffAlgorithm, DiffListener};
use crate::error::{DiffResult, PatchResult};
use crate::myers::MyersDiff;
use crate::patch::{Chunk, Delta, Patch};

/// Computes the patch turning `original` into `revised`, comparing elements
/// with `PartialEq`.
///
/// # Examples
///
/// ```
/// use seqdiff::{diff, patch, unpatch};
///
/// let old = vec!["a", "b", "c"];
/// let new = vec!["a", "z", "c"];
/// let p = diff(&old, &new).unwrap();
/// assert_eq!(p.len(), 1);
/// assert_eq!(patch(&old, &p).unwrap(), new);
/// assert_eq!(unpatch(&new, &p).unwrap(), old);
/// ```
pub fn diff<T: Clone + PartialEq>(original: &[T], revised: &[T]) -> DiffResult<Patch<T>> {
    diff_with_algorithm(original, revised, &MyersDiff::new(), None)
}

/// Like [`diff`], but elements are compared with `equalizer`.
///
/// The resulting chunks hold the actual elements from each side, so
/// applying the patch still needs the target to match them exactly.
pub fn diff_with<T, F>(original: &[T], revised: &[T], equalizer: F) -> DiffResult<Patch<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    diff_with_algorithm(original, revised, &MyersDiff::with_equalizer(equalizer), None)
}

/// Like [`diff`], reporting progress to `listener`.
pub fn diff_with_listener<T: Clone + PartialEq>(
    original: &[T],
    revised: &[T],
    listener: &mut dyn DiffListener,
) -> DiffResult<Patch<T>> {
    diff_with_algorithm(original, revised, &MyersDiff::new(), Some(listener))
}

/// Computes a patch with any [`DiffAlgorithm`].
pub fn diff_with_algorithm<T, A>(
    original: &[T],
    revised: &[T],
    algorithm: &A,
    listener: Option<&mut dyn DiffListener>,
) -> DiffResult<Patch<T>>
where
    T: Clone,
    A: DiffAlgorithm<T> + ?Sized,
{
    let changes = algorithm.diff(original, revised, listener)?;
    Ok(Patch::generate(original, revised, &changes)?)
}

/// Diffs two texts line by line, splitting on `'\n'` only.
pub fn diff_lines(original: &str, revised: &str) -> DiffResult<Patch<String>> {
    let original: Vec<String> = original.split('\n').map(ToString::to_string).collect();
    let revised: Vec<String> = revised.split('\n').map(ToString::to_string).collect();
    diff(&original, &revised)
}

/// Diffs two texts character by character, then joins each chunk back into
/// a single string.
///
/// Positions stay character offsets, so the result describes where the
/// texts differ but cannot be applied to a character sequence.
pub fn diff_inline(original: &str, revised: &str) -> DiffResult<Patch<String>> {
    let original: Vec<String> = original.chars().map(String::from).collect();
    let revised: Vec<String> = revised.chars().map(String::from).collect();
    let patch = diff(&original, &revised)?;

    let deltas = patch
        .into_deltas()
        .into_iter()
        .map(|delta| {
            let kind = delta.delta_type();
            let (orig, rev) = delta.into_chunks();
            Delta::new(kind, compress(orig), compress(rev))
        })
        .collect::<PatchResult<Vec<_>>>()?;
    Ok(Patch::from_deltas(deltas)?)
}

fn compress(chunk: Chunk<String>) -> Chunk<String> {
    let position = chunk.position();
    if chunk.is_empty() {
        return chunk;
    }
    Chunk::new(position, vec![chunk.into_elements().concat()])
}

/// Applies `patch` to `original`, returning the revised sequence.
pub fn patch<T: Clone + PartialEq + std::fmt::Debug>(
    original: &[T],
    patch: &Patch<T>,
) -> PatchResult<Vec<T>> {
    patch.apply_to(original)
}

/// Reverts `patch` on `revised`, returning the original sequence. Each
/// delta is verified against `revised` first.
pub fn unpatch<T: Clone + PartialEq + std::fmt::Debug>(
    revised: &[T],
    patch: &Patch<T>,
) -> PatchResult<Vec<T>> {
    patch.restore(revised)
}
