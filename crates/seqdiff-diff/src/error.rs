//! Error types for the diff crate.

use seqdiff_crypto::HasherError;
use seqdiff_types::TypeError;

use crate::arena::ArenaError;

/// Errors that can occur during diff operations.
///
/// Defects in the algorithm itself (an exhausted search, a malformed path)
/// are not represented here: they panic, because returning a silently
/// wrong patch would be worse.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The inputs were rejected before any work started.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An element could not produce its canonical encoding.
    #[error("invalid element at index {index}: {source}")]
    InvalidElement {
        index: usize,
        #[source]
        source: TypeError,
    },

    /// Node or fingerprint storage could not be allocated.
    #[error("out of memory: {0}")]
    OutOfMemory(String),

    /// The digest engine failed.
    #[error("hasher error: {0}")]
    Hasher(#[from] HasherError),

    /// The configuration is malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// No engine goes by the requested name.
    #[error("unsupported diff engine: {0}")]
    UnsupportedEngine(String),
}

impl From<ArenaError> for DiffError {
    fn from(err: ArenaError) -> Self {
        Self::OutOfMemory(err.to_string())
    }
}

impl DiffError {
    /// `true` for resource exhaustion, which a caller may retry with a
    /// smaller input or a larger budget.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory(_))
    }
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_failures_are_out_of_memory() {
        assert!(DiffError::from(ArenaError::Exhausted { limit: 4 }).is_out_of_memory());
        assert!(DiffError::from(ArenaError::DiagonalAllocation { len: 9 }).is_out_of_memory());
        assert!(!DiffError::Config("x".into()).is_out_of_memory());
    }
}
