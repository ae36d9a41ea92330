//! Myers' O(N·D) shortest-edit-script search.
//!
//! Rounds `d = 0, 1, …` extend, on every diagonal `k = i - j` of matching
//! parity, the furthest-reaching path that uses exactly `d` insertions and
//! deletions. The first path to reach `(n, m)` is a shortest edit script,
//! so the search stops there.
//!
//! See E. Myers, "An O(ND) Difference Algorithm and Its Variations",
//! Algorithmica 1 (1986).

use tracing::error;

use crate::arena::ArenaError;
use crate::node::{NodeId, PathArena};
use crate::oracle::MatchOracle;

/// The terminal node of a shortest path and its edit distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortestPath {
    pub terminal: NodeId,
    /// Number of insertions plus deletions on the path.
    pub edit_distance: usize,
}

/// Build the shortest path through the edit graph described by `oracle`.
///
/// Fails only when the diagonal index or a node cannot be allocated; the
/// partial graph is meaningless and must be discarded with the arena.
pub fn build_path<O: MatchOracle>(arena: &mut PathArena, oracle: &O) -> Result<ShortestPath, ArenaError> {
    let n = to_signed(oracle.original_len());
    let m = to_signed(oracle.revised_len());

    let max = n + m + 1;
    let size = 1 + 2 * max;
    let middle = size / 2;
    let mut diagonal: Vec<Option<NodeId>> = Vec::new();
    diagonal
        .try_reserve_exact(size as usize)
        .map_err(|_| ArenaError::DiagonalAllocation { len: size as usize })?;
    diagonal.resize(size as usize, None);

    diagonal[(middle + 1) as usize] = Some(arena.create_snake(0, -1, None)?);

    for d in 0..max {
        let mut k = -d;
        while k <= d {
            let kmiddle = (middle + k) as usize;
            let kplus = kmiddle + 1;
            let kminus = kmiddle - 1;

            // Down (insertion) at the lower boundary or when the upper
            // neighbour reaches further; right (deletion) otherwise.
            let (mut i, source) =
                if k == -d || (k != d && arena[slot(&diagonal, kminus)].i < arena[slot(&diagonal, kplus)].i) {
                    let source = slot(&diagonal, kplus);
                    (arena[source].i, source)
                } else {
                    let source = slot(&diagonal, kminus);
                    (arena[source].i + 1, source)
                };

            diagonal[kminus] = None;

            let mut j = i - k;
            let mut node = arena.create_node(i, j, source)?;

            while i < n && j < m && oracle.matches(i as usize, j as usize) {
                i += 1;
                j += 1;
            }
            if i > arena[node].i {
                node = arena.create_snake(i, j, Some(node))?;
            }

            diagonal[kmiddle] = Some(node);

            if i >= n && j >= m {
                return Ok(ShortestPath {
                    terminal: node,
                    edit_distance: d as usize,
                });
            }

            k += 2;
        }
        diagonal[(middle + d - 1) as usize] = None;
    }

    error!(original = n, revised = m, "edit graph exhausted without reaching its end");
    panic!("no diff path found for sequences of {n} and {m} elements");
}

/// Diagonal slot that the previous round is guaranteed to have filled.
fn slot(diagonal: &[Option<NodeId>], index: usize) -> NodeId {
    match diagonal[index] {
        Some(node) => node,
        None => {
            error!(index, "empty diagonal slot");
            panic!("diagonal slot {index} read before it was written");
        }
    }
}

fn to_signed(len: usize) -> isize {
    // Slices never exceed isize::MAX elements.
    len as isize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::ElementOracle;

    fn shortest(a: &[&str], b: &[&str]) -> (PathArena, ShortestPath) {
        let mut arena = PathArena::new(16, None);
        let path = build_path(&mut arena, &ElementOracle::new(a, b)).unwrap();
        (arena, path)
    }

    #[test]
    fn empty_sequences_end_at_origin() {
        let (arena, path) = shortest(&[], &[]);
        assert_eq!(path.edit_distance, 0);
        let node = arena[path.terminal];
        assert_eq!((node.i, node.j), (0, 0));
        assert!(!node.snake);
    }

    #[test]
    fn identical_sequences_are_one_snake() {
        let (arena, path) = shortest(&["a", "b", "c"], &["a", "b", "c"]);
        assert_eq!(path.edit_distance, 0);
        let node = arena[path.terminal];
        assert!(node.snake);
        assert_eq!((node.i, node.j), (3, 3));
    }

    #[test]
    fn terminal_reaches_both_ends() {
        let (arena, path) = shortest(&["a", "b", "c", "d"], &["x", "b", "d", "e"]);
        let node = arena[path.terminal];
        assert_eq!((node.i, node.j), (4, 4));
    }

    #[test]
    fn edit_distance_is_minimal() {
        // LCS("abcabba", "cbabac") has length 4: 7 + 6 - 2 * 4 = 5.
        let a: Vec<String> = "abcabba".chars().map(String::from).collect();
        let b: Vec<String> = "cbabac".chars().map(String::from).collect();
        let mut arena = PathArena::new(16, None);
        let path = build_path(&mut arena, &ElementOracle::new(&a, &b)).unwrap();
        assert_eq!(path.edit_distance, 5);
    }

    #[test]
    fn pure_insertion_distance() {
        let (_, path) = shortest(&[], &["a", "b"]);
        assert_eq!(path.edit_distance, 2);
    }

    #[test]
    fn arena_exhaustion_is_reported() {
        let a = ["a", "b", "c"];
        let b = ["x", "y", "z"];
        let mut arena = PathArena::new(4, Some(5));
        let err = build_path(&mut arena, &ElementOracle::new(&a, &b)).unwrap_err();
        assert_eq!(err, ArenaError::Exhausted { limit: 5 });
    }

    /// Reports lengths far larger than any real input.
    struct HugeOracle;

    impl MatchOracle for HugeOracle {
        fn original_len(&self) -> usize {
            1 << 60
        }

        fn revised_len(&self) -> usize {
            1 << 60
        }

        fn matches(&self, _i: usize, _j: usize) -> bool {
            false
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_diagonal_is_an_error() {
        let mut arena = PathArena::new(4, None);
        let err = build_path(&mut arena, &HugeOracle).unwrap_err();
        assert!(matches!(err, ArenaError::DiagonalAllocation { .. }));
        assert!(arena.is_empty());
    }

    #[test]
    fn nodes_spill_into_new_chunks() {
        let a: Vec<u32> = (0..20).collect();
        let b: Vec<u32> = (10..30).collect();
        let mut arena = PathArena::new(4, None);
        build_path(&mut arena, &ElementOracle::new(&a, &b)).unwrap();
        assert!(arena.chunk_count() > 1);
    }
}
