//! Reusable digest engine with an enforced lifecycle.
//!
//! ```text
//!   new ──► Reset ──update──► Working ──finish──► Done
//!             ▲                 │  ▲                │
//!             │                 └──┘ update         │
//!             └──────────────── reset ◄─────────────┘
//!
//!   destroy: any state ──► Destroyed (terminal)
//! ```
//!
//! Calling an operation outside its legal states is a defect in the
//! caller. It panics with a diagnostic naming the actual and the allowed
//! states instead of returning an error.

use std::fmt;

use sha2::Digest;
use tracing::error;

use seqdiff_types::{Fingerprint, FINGERPRINT_LEN};

use crate::algorithm::HashAlgorithm;
use crate::error::{EngineErrorCode, HasherError, HasherResult};

/// Lifecycle state of a [`Hasher`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HasherState {
    Uninitialized,
    Reset,
    Working,
    Done,
    Destroyed,
}

impl HasherState {
    pub fn name(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Reset => "reset",
            Self::Working => "working",
            Self::Done => "done",
            Self::Destroyed => "destroyed",
        }
    }
}

impl fmt::Display for HasherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

enum Engine {
    Sha256(sha2::Sha256),
    Blake3(Box<blake3::Hasher>),
}

impl Engine {
    fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Sha256 => Self::Sha256(sha2::Sha256::new()),
            HashAlgorithm::Blake3 => Self::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Sha256(h) => h.update(data),
            Self::Blake3(h) => {
                h.update(data);
            }
        }
    }

    /// Write the digest into `out` and leave the engine ready for new input.
    fn finalize_reset(&mut self, out: &mut [u8]) -> usize {
        match self {
            Self::Sha256(h) => copy_digest(&h.finalize_reset(), out),
            Self::Blake3(h) => {
                let digest = h.finalize();
                h.reset();
                copy_digest(digest.as_bytes(), out)
            }
        }
    }
}

fn copy_digest(digest: &[u8], out: &mut [u8]) -> usize {
    let len = digest.len().min(out.len());
    out[..len].copy_from_slice(&digest[..len]);
    len
}

/// A digest engine behind a strict `reset → working → done` lifecycle.
///
/// One instance is not safe for concurrent use, but independent instances
/// may run on separate threads.
pub struct Hasher {
    algorithm: HashAlgorithm,
    state: HasherState,
    engine: Option<Engine>,
}

impl Hasher {
    /// Create a hasher in the `Reset` state.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        let mut hasher = Self {
            algorithm,
            state: HasherState::Uninitialized,
            engine: None,
        };
        hasher.engine = Some(Engine::new(algorithm));
        hasher.state = HasherState::Reset;
        hasher
    }

    /// Create a hasher from an algorithm name such as `"sha256"`.
    pub fn for_name(name: &str) -> HasherResult<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn state(&self) -> HasherState {
        self.state
    }

    /// Size in bytes of the digest this hasher produces.
    pub fn digest_len(&self) -> usize {
        self.algorithm.digest_len()
    }

    /// Feed `data` into the digest. Legal from `Reset` and `Working`.
    #[track_caller]
    pub fn update(&mut self, data: &[u8]) {
        let engine = self.engine_in(&[HasherState::Reset, HasherState::Working]);
        engine.update(data);
        self.state = HasherState::Working;
    }

    /// Finish the digest into `out`, returning the digest length.
    ///
    /// Legal only from `Working`. A buffer shorter than the digest is an
    /// engine error and leaves the hasher in `Working` so the call can be
    /// retried.
    #[track_caller]
    pub fn finish_into(&mut self, out: &mut [u8]) -> HasherResult<usize> {
        let digest_len = self.digest_len();
        let engine = self.engine_in(&[HasherState::Working]);
        if out.len() < digest_len {
            return Err(HasherError::Engine {
                code: EngineErrorCode::BufferTooSmall,
            });
        }
        let written = engine.finalize_reset(out);
        self.state = HasherState::Done;
        Ok(written)
    }

    /// Finish the digest as a [`Fingerprint`]. Legal only from `Working`.
    #[track_caller]
    pub fn finish(&mut self) -> HasherResult<Fingerprint> {
        let mut out = [0u8; FINGERPRINT_LEN];
        let written = self.finish_into(&mut out)?;
        Fingerprint::from_slice(&out[..written]).map_err(|_| HasherError::Engine {
            code: EngineErrorCode::DigestLength,
        })
    }

    /// Prepare a finished hasher for new input without reallocating.
    /// Legal only from `Done`.
    #[track_caller]
    pub fn reset(&mut self) {
        self.engine_in(&[HasherState::Done]);
        self.state = HasherState::Reset;
    }

    /// Release the engine. Legal from any state; the hasher is unusable
    /// afterwards.
    pub fn destroy(&mut self) {
        self.engine = None;
        self.state = HasherState::Destroyed;
    }

    /// Hash one complete input: `update`, `finish`, then `reset`.
    /// Legal only from `Reset`, and returns the hasher to `Reset`.
    #[track_caller]
    pub fn fingerprint(&mut self, data: &[u8]) -> HasherResult<Fingerprint> {
        self.engine_in(&[HasherState::Reset]);
        self.update(data);
        let fp = self.finish()?;
        self.reset();
        Ok(fp)
    }

    #[track_caller]
    fn engine_in(&mut self, allowed: &[HasherState]) -> &mut Engine {
        let state = self.state;
        if !allowed.contains(&state) {
            unexpected_state(state, allowed);
        }
        match self.engine.as_mut() {
            Some(engine) => engine,
            None => unexpected_state(state, allowed),
        }
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("algorithm", &self.algorithm)
            .field("state", &self.state)
            .finish()
    }
}

#[cold]
#[track_caller]
fn unexpected_state(actual: HasherState, allowed: &[HasherState]) -> ! {
    let allowed = allowed
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(", ");
    error!(actual = actual.name(), allowed = %allowed, "illegal hasher transition");
    panic!("expected hasher states {{{allowed}}}, but got {actual}");
}

/// One-shot fingerprint of `data`, without a lifecycle-managed engine.
pub fn fingerprint(algorithm: HashAlgorithm, data: &[u8]) -> Fingerprint {
    let mut out = [0u8; FINGERPRINT_LEN];
    match algorithm {
        HashAlgorithm::Sha256 => out.copy_from_slice(&sha2::Sha256::digest(data)),
        HashAlgorithm::Blake3 => out = *blake3::hash(data).as_bytes(),
    }
    Fingerprint::from_digest(out)
}
