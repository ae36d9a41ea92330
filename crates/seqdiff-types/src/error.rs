use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// An element could not produce its canonical byte encoding.
    #[error("element encoding failed: {0}")]
    Encoding(String),
}

/// Errors raised while verifying or applying a patch to a target sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    /// The chunk extends past the end of the target.
    #[error("chunk at {position} with {len} elements exceeds target of {target_len} elements")]
    ChunkOutOfBounds {
        position: usize,
        len: usize,
        target_len: usize,
    },

    /// The target does not hold the chunk's elements at the chunk's anchor.
    #[error("chunk content does not match the target at position {position}")]
    ContentMismatch { position: usize },

    /// A delta's anchor lies beyond the end of the target.
    #[error("delta anchor {position} exceeds target of {target_len} elements")]
    AnchorOutOfBounds { position: usize, target_len: usize },
}
