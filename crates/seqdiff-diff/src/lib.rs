//! Myers difference engine for seqdiff.
//!
//! Computes the shortest edit script between two sequences of
//! [`Element`]s and returns it as a [`Patch`]. Elements are fingerprinted
//! first, so the path search compares fixed-size digests instead of
//! arbitrary values; [`DiffConfig::plain`] turns that off.
//!
//! # Key Types
//!
//! - [`MyersEngine`] / [`DiffEngine`] -- the engine and the interface it implements
//! - [`DiffConfig`] -- digest algorithm, arena sizing, node budget, parallelism
//! - [`PathArena`] / [`DiffNode`] -- edit-graph storage for one diff call
//! - [`DiffError`] -- recoverable failures; algorithm defects panic instead
//!
//! ```
//! let patch = seqdiff_diff::diff(&["a", "b", "c"], &["a", "x", "c"]).unwrap();
//! assert_eq!(patch.apply_to(&["a", "b", "c"]).unwrap(), vec!["a", "x", "c"]);
//! ```

pub mod arena;
pub mod config;
pub mod engine;
pub mod error;
pub mod fingerprints;
pub mod json;
pub mod node;
pub mod oracle;
pub mod path;
pub mod revision;

pub use arena::{Arena, ArenaError, Handle, DEFAULT_CHUNK_CAPACITY};
pub use config::DiffConfig;
pub use engine::{available_engines, DiffEngine, MyersEngine};
pub use error::{DiffError, DiffResult};
pub use json::{diff_json, diff_json_with, JsonKind};
pub use node::{DiffNode, NodeId, PathArena};
pub use oracle::{ElementOracle, FingerprintOracle, MatchOracle};
pub use path::{build_path, ShortestPath};
pub use revision::build_revision;

pub use seqdiff_types::{Chunk, Delta, DeltaKind, Element, Patch};

/// Diff two sequences with the default engine.
pub fn diff<T>(original: &[T], revised: &[T]) -> DiffResult<Patch<T>>
where
    T: Element + Clone + Sync,
{
    MyersEngine::default().diff(original, revised)
}

/// Diff two sequences with an explicit configuration.
pub fn diff_with<T>(config: &DiffConfig, original: &[T], revised: &[T]) -> DiffResult<Patch<T>>
where
    T: Element + Clone + Sync,
{
    MyersEngine::new(config.clone())?.diff(original, revised)
}

/// Diff two chunks with the default engine, reporting deltas in the
/// coordinates of the sequences the chunks were cut from.
pub fn diff_chunks<T>(original: &Chunk<T>, revised: &Chunk<T>) -> DiffResult<Vec<Delta<T>>>
where
    T: Element + Clone + Sync,
{
    MyersEngine::default().diff_chunks(original, revised)
}
