//! Fingerprint hashing for seqdiff.
//!
//! Converts an element's canonical byte encoding into a 32-byte
//! [`Fingerprint`](seqdiff_types::Fingerprint). Two entry points exist:
//!
//! - [`Hasher`] -- a reusable digest engine with an explicit lifecycle
//!   (`reset → working → done → reset …`). Calling an operation from the
//!   wrong state is a bug in the caller and panics.
//! - [`fingerprint`] -- one-shot hashing for callers that do not need to
//!   reuse an engine.
//!
//! All digests wrap established libraries (`sha2`, `blake3`); no custom
//! cryptography.

pub mod algorithm;
pub mod error;
pub mod hasher;

pub use algorithm::HashAlgorithm;
pub use error::{error_message, EngineErrorCode, HasherError, HasherResult};
pub use hasher::{fingerprint, Hasher, HasherState};
