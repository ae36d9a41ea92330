//! Shared types for seqdiff.
//!
//! This crate holds the vocabulary every other seqdiff crate speaks: the
//! fixed-width [`Fingerprint`] that stands in for an element during
//! comparison, the [`Element`] trait describing what can be diffed, and the
//! structured output of a diff ([`Patch`], [`Delta`], [`Chunk`]).
//!
//! # Key Types
//!
//! - [`Fingerprint`] -- 32-byte digest of an element's canonical encoding
//! - [`Element`] -- comparison unit with value equality and a byte encoding
//! - [`Chunk`] -- anchored slice of one sequence
//! - [`Delta`] / [`DeltaKind`] -- one insertion, deletion, or replacement
//! - [`Patch`] -- ordered, non-overlapping deltas between two sequences

pub mod chunk;
pub mod delta;
pub mod element;
pub mod error;
pub mod fingerprint;
pub mod patch;

pub use chunk::Chunk;
pub use delta::{Delta, DeltaKind};
pub use element::Element;
pub use error::{PatchError, TypeError};
pub use fingerprint::{Fingerprint, FINGERPRINT_LEN};
pub use patch::Patch;
