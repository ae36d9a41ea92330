//! Edit-graph nodes and their arena.
//!
//! A path through the edit graph is stored compressed: each maximal run of
//! matches is one *snake* node, and each run of insertions/deletions ends
//! in one *plain* node whose `prev` jumps straight back to the latest snake.
//! Nodes form a DAG with shared tails and are never mutated once created.
//!
//! # Linkage
//!
//! - A plain node's `prev` is its source's `last_snake`, skipping the
//!   intermediate plain nodes of the same non-matching run.
//! - A snake's `last_snake` is itself.
//! - Nodes off the grid (`i < 0` or `j < 0`, i.e. the bootstrap sentinel)
//!   have no `last_snake`.
//! - The origin node at `(0, 0)` has no predecessor and anchors itself:
//!   its `last_snake` is itself, so an edit at the very start of the
//!   sequences still has an anchor to measure from.

use std::ops::Index;

use crate::arena::{Arena, ArenaError, Handle};

/// Handle of a node in a [`PathArena`].
pub type NodeId = Handle;

/// One node of the edit graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffNode {
    /// Elements consumed from the original sequence.
    pub i: isize,
    /// Elements consumed from the revised sequence.
    pub j: isize,
    /// Predecessor on the best path known when this node was created.
    pub prev: Option<NodeId>,
    /// Most recent snake (or the origin) reachable from here.
    pub last_snake: Option<NodeId>,
    pub snake: bool,
}

impl DiffNode {
    /// `true` for the bootstrap sentinel and anything else off the grid.
    pub fn is_bootstrap(&self) -> bool {
        self.i < 0 || self.j < 0
    }
}

/// Node storage for one diff call.
#[derive(Debug)]
pub struct PathArena {
    nodes: Arena<DiffNode>,
}

impl PathArena {
    pub fn new(chunk_capacity: usize, max_nodes: Option<usize>) -> Self {
        Self {
            nodes: Arena::new(chunk_capacity).with_limit(max_nodes),
        }
    }

    /// Total nodes allocated.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn chunk_count(&self) -> usize {
        self.nodes.chunk_count()
    }

    /// Create a plain node at `(i, j)` reached from `source`.
    pub fn create_node(&mut self, i: isize, j: isize, source: NodeId) -> Result<NodeId, ArenaError> {
        let prev = self.nodes[source].last_snake;
        let id = self.nodes.next_handle();
        let last_snake = if i < 0 || j < 0 {
            None
        } else {
            match prev {
                Some(p) => self.nodes[p].last_snake,
                None => Some(id),
            }
        };
        self.nodes.alloc(DiffNode {
            i,
            j,
            prev,
            last_snake,
            snake: false,
        })
    }

    /// Create a snake ending at `(i, j)` whose match run started at `prev`.
    pub fn create_snake(&mut self, i: isize, j: isize, prev: Option<NodeId>) -> Result<NodeId, ArenaError> {
        let id = self.nodes.next_handle();
        let last_snake = if i < 0 || j < 0 { None } else { Some(id) };
        self.nodes.alloc(DiffNode {
            i,
            j,
            prev,
            last_snake,
            snake: true,
        })
    }
}

impl Index<NodeId> for PathArena {
    type Output = DiffNode;

    fn index(&self, id: NodeId) -> &DiffNode {
        &self.nodes[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> PathArena {
        PathArena::new(4, None)
    }

    #[test]
    fn sentinel_has_no_last_snake() {
        let mut a = arena();
        let sentinel = a.create_snake(0, -1, None).unwrap();
        assert!(a[sentinel].snake);
        assert!(a[sentinel].is_bootstrap());
        assert_eq!(a[sentinel].last_snake, None);
    }

    #[test]
    fn origin_anchors_itself() {
        let mut a = arena();
        let sentinel = a.create_snake(0, -1, None).unwrap();
        let origin = a.create_node(0, 0, sentinel).unwrap();
        assert_eq!(a[origin].prev, None);
        assert_eq!(a[origin].last_snake, Some(origin));
    }

    #[test]
    fn plain_node_skips_to_last_snake() {
        let mut a = arena();
        let sentinel = a.create_snake(0, -1, None).unwrap();
        let origin = a.create_node(0, 0, sentinel).unwrap();
        let snake = a.create_snake(2, 2, Some(origin)).unwrap();
        let step1 = a.create_node(3, 2, snake).unwrap();
        let step2 = a.create_node(3, 3, step1).unwrap();
        assert_eq!(a[step1].prev, Some(snake));
        assert_eq!(a[step2].prev, Some(snake));
        assert_eq!(a[step2].last_snake, Some(snake));
    }

    #[test]
    fn snake_is_its_own_last_snake() {
        let mut a = arena();
        let sentinel = a.create_snake(0, -1, None).unwrap();
        let origin = a.create_node(0, 0, sentinel).unwrap();
        let snake = a.create_snake(1, 1, Some(origin)).unwrap();
        assert_eq!(a[snake].last_snake, Some(snake));
        assert_eq!(a[snake].prev, Some(origin));
    }

    #[test]
    fn plain_nodes_after_origin_point_at_origin() {
        let mut a = arena();
        let sentinel = a.create_snake(0, -1, None).unwrap();
        let origin = a.create_node(0, 0, sentinel).unwrap();
        let down = a.create_node(0, 1, origin).unwrap();
        let further = a.create_node(0, 2, down).unwrap();
        assert_eq!(a[further].prev, Some(origin));
        assert!(!a[a[further].prev.unwrap()].snake);
    }

    #[test]
    fn budget_failure_surfaces() {
        let mut a = PathArena::new(4, Some(1));
        let sentinel = a.create_snake(0, -1, None).unwrap();
        assert_eq!(
            a.create_node(0, 0, sentinel),
            Err(ArenaError::Exhausted { limit: 1 })
        );
    }
}
