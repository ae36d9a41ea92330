use serde::{Deserialize, Serialize};

use crate::chunk::Chunk;
use crate::error::PatchError;

/// The kind of edit a [`Delta`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeltaKind {
    /// Elements present only in the revised sequence.
    Insert,
    /// Elements present only in the original sequence.
    Delete,
    /// Original elements replaced by different revised elements.
    Change,
}

/// One contiguous non-matching run between two sequences.
///
/// The kind is implied by which chunks are empty: an empty original chunk
/// is an insertion, an empty revised chunk is a deletion, and two
/// non-empty chunks are a replacement.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Delta<T> {
    original: Chunk<T>,
    revised: Chunk<T>,
}

impl<T> Delta<T> {
    /// Pair an original chunk with its revised counterpart.
    pub fn new(original: Chunk<T>, revised: Chunk<T>) -> Self {
        Self { original, revised }
    }

    /// The chunk cut from the original sequence.
    pub fn original(&self) -> &Chunk<T> {
        &self.original
    }

    /// The chunk cut from the revised sequence.
    pub fn revised(&self) -> &Chunk<T> {
        &self.revised
    }

    pub fn kind(&self) -> DeltaKind {
        match (self.original.is_empty(), self.revised.is_empty()) {
            (true, false) => DeltaKind::Insert,
            (false, true) => DeltaKind::Delete,
            _ => DeltaKind::Change,
        }
    }

    /// Number of elements this delta removes plus the number it adds.
    pub fn changed_elements(&self) -> usize {
        self.original.len() + self.revised.len()
    }

    /// The same edit seen from the other side: original and revised swap.
    pub fn invert(self) -> Self {
        Self {
            original: self.revised,
            revised: self.original,
        }
    }

    /// Shift both anchors, used when a diff ran over a window of a larger
    /// sequence.
    pub fn shift(&mut self, original_offset: usize, revised_offset: usize) {
        self.original.shift(original_offset);
        self.revised.shift(revised_offset);
    }

    pub fn into_chunks(self) -> (Chunk<T>, Chunk<T>) {
        (self.original, self.revised)
    }
}

impl<T: Clone + PartialEq> Delta<T> {
    /// Check that this delta can be applied to `target`.
    pub fn verify(&self, target: &[T]) -> Result<(), PatchError> {
        if self.original.is_empty() {
            if self.original.position() > target.len() {
                return Err(PatchError::AnchorOutOfBounds {
                    position: self.original.position(),
                    target_len: target.len(),
                });
            }
            return Ok(());
        }
        self.original.verify(target)
    }

    /// Replace the original chunk in `target` with the revised elements.
    pub fn apply_to(&self, target: &mut Vec<T>) -> Result<(), PatchError> {
        self.verify(target)?;
        let range = self.original.position()..self.original.end();
        target.splice(range, self.revised.elements().iter().cloned());
        Ok(())
    }

    /// Undo this delta on a revised `target`, putting the original
    /// elements back at the revised anchor.
    pub fn restore(&self, target: &mut Vec<T>) -> Result<(), PatchError> {
        if self.revised.is_empty() {
            if self.revised.position() > target.len() {
                return Err(PatchError::AnchorOutOfBounds {
                    position: self.revised.position(),
                    target_len: target.len(),
                });
            }
        } else {
            self.revised.verify(target)?;
        }
        let range = self.revised.position()..self.revised.end();
        target.splice(range, self.original.elements().iter().cloned());
        Ok(())
    }
}
