//! Diff engines.
//!
//! [`MyersEngine`] runs one diff call end to end: fingerprint, search the
//! edit graph, rebuild the patch. Each call owns its hasher and arena, so a
//! single engine can serve concurrent calls from several threads.

use tracing::debug;

use seqdiff_types::{Chunk, Delta, Element, Patch};

use crate::config::DiffConfig;
use crate::error::{DiffError, DiffResult};
use crate::fingerprints::fingerprint_pair;
use crate::node::PathArena;
use crate::oracle::{ElementOracle, FingerprintOracle};
use crate::path::{build_path, ShortestPath};
use crate::revision::build_revision;

/// Something that can compute a [`Patch`] between two sequences.
pub trait DiffEngine {
    /// Short identifier, e.g. `"myers"`.
    fn name(&self) -> &str;

    /// Compute the patch turning `original` into `revised`.
    fn diff<T>(&self, original: &[T], revised: &[T]) -> DiffResult<Patch<T>>
    where
        T: Element + Clone + Sync;

    /// Diff the elements of two chunks and report the deltas in the
    /// coordinates of the sequences the chunks were cut from.
    fn diff_chunks<T>(&self, original: &Chunk<T>, revised: &Chunk<T>) -> DiffResult<Vec<Delta<T>>>
    where
        T: Element + Clone + Sync,
    {
        let patch = self.diff(original.elements(), revised.elements())?;
        Ok(patch
            .into_iter()
            .map(|mut delta| {
                delta.shift(original.position(), revised.position());
                delta
            })
            .collect())
    }
}

/// Myers' O(N·D) algorithm with optional fingerprint acceleration.
#[derive(Clone, Debug, Default)]
pub struct MyersEngine {
    config: DiffConfig,
}

impl MyersEngine {
    /// Create an engine, rejecting an unusable configuration.
    pub fn new(config: DiffConfig) -> DiffResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// An engine that compares elements directly.
    pub fn plain() -> Self {
        Self {
            config: DiffConfig::plain(),
        }
    }

    /// Look up an engine by the name it reports, e.g. `"myers"` or
    /// `"plain-myers"`.
    pub fn for_name(name: &str) -> DiffResult<Self> {
        available_engines()
            .into_iter()
            .find(|engine| engine.name() == name)
            .ok_or_else(|| DiffError::UnsupportedEngine(name.to_string()))
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    fn shortest_path<T>(&self, arena: &mut PathArena, original: &[T], revised: &[T]) -> DiffResult<ShortestPath>
    where
        T: Element + Sync,
    {
        if !self.config.hash_optimization {
            return Ok(build_path(arena, &ElementOracle::new(original, revised))?);
        }
        let table = fingerprint_pair(&self.config, original, revised)?;
        let oracle = FingerprintOracle::<T>::new(&table.original, &table.revised);
        let path = if self.config.confirm_matches {
            build_path(arena, &oracle.confirmed_by(original, revised))?
        } else {
            build_path(arena, &oracle)?
        };
        Ok(path)
    }
}

impl DiffEngine for MyersEngine {
    fn name(&self) -> &str {
        if self.config.hash_optimization {
            "myers"
        } else {
            "plain-myers"
        }
    }

    fn diff<T>(&self, original: &[T], revised: &[T]) -> DiffResult<Patch<T>>
    where
        T: Element + Clone + Sync,
    {
        let mut arena = PathArena::new(self.config.arena_chunk_capacity, self.config.max_nodes);
        let path = self.shortest_path(&mut arena, original, revised)?;
        let patch = build_revision(&arena, path.terminal, original, revised);
        debug!(
            engine = self.name(),
            original = original.len(),
            revised = revised.len(),
            edit_distance = path.edit_distance,
            deltas = patch.len(),
            nodes = arena.len(),
            "diff complete"
        );
        Ok(patch)
    }
}

/// All engines, fastest first.
pub fn available_engines() -> Vec<MyersEngine> {
    vec![MyersEngine::default(), MyersEngine::plain()]
}
