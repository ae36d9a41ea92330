//! Turn a shortest path into a [`Patch`].

use tracing::error;

use seqdiff_types::{Chunk, Delta, Patch};

use crate::node::{NodeId, PathArena};

/// Walk the path ending at `terminal` backwards and collect one delta per
/// non-matching run, in ascending anchor order.
///
/// Panics if the path alternates plain and snake nodes incorrectly, which
/// only a defect in the path builder can cause.
pub fn build_revision<T: Clone>(arena: &PathArena, terminal: NodeId, original: &[T], revised: &[T]) -> Patch<T> {
    let mut deltas = Vec::new();

    // A trailing match run produces no delta.
    let mut path = if arena[terminal].snake {
        arena[terminal].prev
    } else {
        Some(terminal)
    };

    while let Some(current) = path {
        let node = arena[current];
        let Some(anchor_id) = node.prev else { break };
        let anchor = arena[anchor_id];
        if anchor.j < 0 {
            break;
        }
        if node.snake {
            error!(i = node.i, j = node.j, "snake found where a plain node was expected");
            panic!("found snake at ({}, {}) when looking for a diff node", node.i, node.j);
        }

        let (i, j) = (node.i as usize, node.j as usize);
        let (anchor_i, anchor_j) = (anchor.i as usize, anchor.j as usize);
        deltas.push(Delta::new(
            Chunk::new(anchor_i, original[anchor_i..i].to_vec()),
            Chunk::new(anchor_j, revised[anchor_j..j].to_vec()),
        ));

        path = if anchor.snake { anchor.prev } else { Some(anchor_id) };
    }

    deltas.reverse();
    Patch::from_deltas(deltas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::ElementOracle;
    use crate::path::build_path;
    use seqdiff_types::DeltaKind;

    fn revise(a: &[&'static str], b: &[&'static str]) -> Patch<&'static str> {
        let mut arena = PathArena::new(8, None);
        let path = build_path(&mut arena, &ElementOracle::new(a, b)).unwrap();
        build_revision(&arena, path.terminal, a, b)
    }

    #[test]
    fn single_replacement() {
        let patch = revise(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(patch.len(), 1);
        let delta = &patch.deltas()[0];
        assert_eq!(delta.original(), &Chunk::new(1, vec!["b"]));
        assert_eq!(delta.revised(), &Chunk::new(1, vec!["x"]));
        assert_eq!(delta.kind(), DeltaKind::Change);
    }

    #[test]
    fn leading_change_is_kept() {
        let patch = revise(&["x", "c"], &["y", "c"]);
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.deltas()[0].original(), &Chunk::new(0, vec!["x"]));
        assert_eq!(patch.deltas()[0].revised(), &Chunk::new(0, vec!["y"]));
    }

    #[test]
    fn trailing_insertion() {
        let patch = revise(&["a"], &["a", "b", "c"]);
        assert_eq!(patch.len(), 1);
        let delta = &patch.deltas()[0];
        assert_eq!(delta.kind(), DeltaKind::Insert);
        assert_eq!(delta.original(), &Chunk::empty(1));
        assert_eq!(delta.revised(), &Chunk::new(1, vec!["b", "c"]));
    }

    #[test]
    fn deltas_come_out_ascending() {
        let patch = revise(&["a", "b", "c", "d", "e"], &["x", "b", "c", "y", "e", "z"]);
        let anchors: Vec<_> = patch.deltas().iter().map(|d| d.original().position()).collect();
        assert_eq!(anchors, vec![0, 3, 5]);
    }

    #[test]
    fn identical_sequences_yield_nothing() {
        assert!(revise(&["a", "b"], &["a", "b"]).is_empty());
        assert!(revise(&[], &[]).is_empty());
    }
}
