use serde::{Deserialize, Serialize};

use crate::delta::Delta;
use crate::error::PatchError;

/// All deltas between an original and a revised sequence.
///
/// Deltas are kept in ascending order of their original anchor. A patch
/// produced by a diff has non-overlapping deltas that together cover every
/// non-matching run; matching runs never appear.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Patch<T> {
    deltas: Vec<Delta<T>>,
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self { deltas: Vec::new() }
    }
}

impl<T> Patch<T> {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a patch from deltas in any order.
    pub fn from_deltas(mut deltas: Vec<Delta<T>>) -> Self {
        deltas.sort_by_key(|d| d.original().position());
        Self { deltas }
    }

    /// Insert a delta, keeping the patch ordered by original anchor.
    pub fn add_delta(&mut self, delta: Delta<T>) {
        let position = delta.original().position();
        let at = self
            .deltas
            .partition_point(|d| d.original().position() <= position);
        self.deltas.insert(at, delta);
    }

    pub fn deltas(&self) -> &[Delta<T>] {
        &self.deltas
    }

    pub fn into_deltas(self) -> Vec<Delta<T>> {
        self.deltas
    }

    /// Number of deltas.
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    /// Returns `true` if the two sequences were identical.
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Total number of elements deleted plus elements inserted.
    ///
    /// For a patch produced by the Myers engine this equals the minimal
    /// edit distance between the two sequences.
    pub fn changed_elements(&self) -> usize {
        self.deltas.iter().map(Delta::changed_elements).sum()
    }

    /// The patch that turns the revised sequence back into the original.
    pub fn invert(self) -> Self {
        Self {
            deltas: self.deltas.into_iter().map(Delta::invert).collect(),
        }
    }
}

impl<T: Clone + PartialEq> Patch<T> {
    /// Apply the patch to `target`, returning the revised sequence.
    ///
    /// Deltas are applied back to front so earlier anchors stay valid.
    pub fn apply_to(&self, target: &[T]) -> Result<Vec<T>, PatchError> {
        let mut result = target.to_vec();
        for delta in self.deltas.iter().rev() {
            delta.apply_to(&mut result)?;
        }
        Ok(result)
    }

    /// Undo the patch on a revised `target`, returning the original sequence.
    pub fn restore(&self, target: &[T]) -> Result<Vec<T>, PatchError> {
        let mut result = target.to_vec();
        for delta in self.deltas.iter().rev() {
            delta.restore(&mut result)?;
        }
        Ok(result)
    }
}

impl<T> IntoIterator for Patch<T> {
    type Item = Delta<T>;
    type IntoIter = std::vec::IntoIter<Delta<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.deltas.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Patch<T> {
    type Item = &'a Delta<T>;
    type IntoIter = std::slice::Iter<'a, Delta<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.deltas.iter()
    }
}
