//! Chunked bump allocator for call-scoped values.
//!
//! An [`Arena`] hands out stable [`Handle`]s for values pushed into a chain
//! of fixed-capacity chunks. A chunk never grows past the capacity it was
//! reserved with, so values never move once allocated. Nothing is freed
//! individually: every value is released together when the arena drops,
//! whichever way the owning call exits.

use std::ops::Index;

use tracing::{trace, warn};

/// Default number of values per chunk.
pub const DEFAULT_CHUNK_CAPACITY: usize = 256;

/// Stable index of a value inside one [`Arena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(usize);

impl Handle {
    /// Allocation order of this handle, starting at zero.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Allocation failures. The in-flight operation must be abandoned.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArenaError {
    /// The configured allocation budget is used up.
    #[error("arena budget of {limit} values exhausted")]
    Exhausted { limit: usize },

    /// The allocator could not provide memory for a new chunk.
    #[error("failed to allocate an arena chunk of {capacity} values")]
    ChunkAllocation { capacity: usize },

    /// The diagonal index for a path search could not be allocated.
    #[error("failed to allocate a diagonal of {len} slots")]
    DiagonalAllocation { len: usize },
}

/// A chunked bump allocator.
#[derive(Debug)]
pub struct Arena<T> {
    chunks: Vec<Vec<T>>,
    chunk_capacity: usize,
    len: usize,
    limit: Option<usize>,
}

impl<T> Arena<T> {
    /// Create an empty arena. No memory is reserved until the first
    /// allocation.
    pub fn new(chunk_capacity: usize) -> Self {
        Self {
            chunks: Vec::new(),
            chunk_capacity: chunk_capacity.max(1),
            len: 0,
            limit: None,
        }
    }

    /// Cap the total number of values this arena will ever hold.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Number of values allocated so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of chunks in the chain.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn chunk_capacity(&self) -> usize {
        self.chunk_capacity
    }

    /// The handle the next successful [`alloc`](Self::alloc) will return.
    pub fn next_handle(&self) -> Handle {
        Handle(self.len)
    }

    /// Move `value` into the arena. O(1) amortized.
    pub fn alloc(&mut self, value: T) -> Result<Handle, ArenaError> {
        if let Some(limit) = self.limit {
            if self.len >= limit {
                warn!(limit, "arena budget exhausted");
                return Err(ArenaError::Exhausted { limit });
            }
        }
        let chunk = self.len / self.chunk_capacity;
        if chunk == self.chunks.len() {
            self.grow()?;
        }
        self.chunks[chunk].push(value);
        let handle = Handle(self.len);
        self.len += 1;
        Ok(handle)
    }

    /// Look up a value. Returns `None` for a handle this arena never issued.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.chunks
            .get(handle.0 / self.chunk_capacity)
            .and_then(|chunk| chunk.get(handle.0 % self.chunk_capacity))
    }

    fn grow(&mut self) -> Result<(), ArenaError> {
        let capacity = self.chunk_capacity;
        let mut chunk = Vec::new();
        chunk
            .try_reserve_exact(capacity)
            .map_err(|_| ArenaError::ChunkAllocation { capacity })?;
        self.chunks
            .try_reserve(1)
            .map_err(|_| ArenaError::ChunkAllocation { capacity })?;
        self.chunks.push(chunk);
        trace!(chunks = self.chunks.len(), capacity, "arena chunk appended");
        Ok(())
    }
}

impl<T> Index<Handle> for Arena<T> {
    type Output = T;

    /// Panics if `handle` was not issued by this arena.
    fn index(&self, handle: Handle) -> &T {
        &self.chunks[handle.0 / self.chunk_capacity][handle.0 % self.chunk_capacity]
    }
}
