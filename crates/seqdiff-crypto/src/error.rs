//! Error types for the hashing crate.

use std::fmt;

/// Failure codes reported by the underlying digest engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum EngineErrorCode {
    /// The caller's output buffer cannot hold the digest.
    BufferTooSmall = 1,
    /// The engine produced a digest of an unexpected width.
    DigestLength = 2,
}

impl EngineErrorCode {
    /// Numeric code, stable across releases.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Look up a code by its numeric value.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::BufferTooSmall),
            2 => Some(Self::DigestLength),
            _ => None,
        }
    }

    /// Human-readable message for this code.
    pub fn message(self) -> &'static str {
        match self {
            Self::BufferTooSmall => "output buffer is smaller than the digest",
            Self::DigestLength => "digest engine returned an unexpected digest length",
        }
    }
}

impl fmt::Display for EngineErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

/// Message for a raw, non-zero engine error code.
pub fn error_message(code: u32) -> &'static str {
    match EngineErrorCode::from_code(code) {
        Some(code) => code.message(),
        None => "unknown digest engine error",
    }
}

/// Errors from hashing operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HasherError {
    /// No digest engine exists for the requested algorithm name.
    #[error("unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The digest engine failed.
    #[error("digest engine error: {code}")]
    Engine { code: EngineErrorCode },
}

impl HasherError {
    /// The engine error code, if this is an engine failure.
    pub fn engine_code(&self) -> Option<EngineErrorCode> {
        match self {
            Self::Engine { code } => Some(*code),
            Self::UnsupportedAlgorithm(_) => None,
        }
    }
}

/// Convenience alias for hashing results.
pub type HasherResult<T> = Result<T, HasherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for code in [EngineErrorCode::BufferTooSmall, EngineErrorCode::DigestLength] {
            assert_eq!(EngineErrorCode::from_code(code.code()), Some(code));
            assert_eq!(error_message(code.code()), code.message());
        }
    }

    #[test]
    fn unknown_code_has_generic_message() {
        assert_eq!(EngineErrorCode::from_code(0), None);
        assert_eq!(error_message(99), "unknown digest engine error");
    }

    #[test]
    fn engine_error_display_includes_message_and_code() {
        let err = HasherError::Engine {
            code: EngineErrorCode::BufferTooSmall,
        };
        assert_eq!(
            err.to_string(),
            "digest engine error: output buffer is smaller than the digest (1)"
        );
        assert_eq!(err.engine_code(), Some(EngineErrorCode::BufferTooSmall));
    }
}
