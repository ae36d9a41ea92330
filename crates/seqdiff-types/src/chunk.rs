use serde::{Deserialize, Serialize};

use crate::error::PatchError;

/// An anchored run of elements from one side of a diff.
///
/// `position` is the zero-based index in the sequence the chunk was cut
/// from; `elements` are the elements found there. An empty chunk marks a
/// point between two elements (where an insertion lands, for example).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chunk<T> {
    position: usize,
    elements: Vec<T>,
}

impl<T> Chunk<T> {
    /// Create a chunk of `elements` anchored at `position`.
    pub fn new(position: usize, elements: Vec<T>) -> Self {
        Self { position, elements }
    }

    /// An empty chunk anchored at `position`.
    pub fn empty(position: usize) -> Self {
        Self::new(position, Vec::new())
    }

    /// Zero-based anchor in the source sequence.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The elements of this chunk.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Consume the chunk, returning its elements.
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }

    /// Number of elements in the chunk.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the chunk holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Index of the last element covered by the chunk, or `None` when empty.
    pub fn last(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end() - 1)
        }
    }

    /// One past the last index covered by the chunk.
    pub fn end(&self) -> usize {
        self.position + self.elements.len()
    }

    /// Move the anchor by `offset` positions.
    pub fn shift(&mut self, offset: usize) {
        self.position += offset;
    }
}

impl<T: PartialEq> Chunk<T> {
    /// Check that `target` holds this chunk's elements at its anchor.
    pub fn verify(&self, target: &[T]) -> Result<(), PatchError> {
        if self.end() > target.len() {
            return Err(PatchError::ChunkOutOfBounds {
                position: self.position,
                len: self.len(),
                target_len: target.len(),
            });
        }
        let window = &target[self.position..self.end()];
        match window.iter().zip(&self.elements).position(|(a, b)| a != b) {
            Some(offset) => Err(PatchError::ContentMismatch {
                position: self.position + offset,
            }),
            None => Ok(()),
        }
    }
}
