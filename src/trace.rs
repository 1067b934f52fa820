//! Recursive depth-first path tracer with backtracking.
//!
//! Every outgoing branch is explored even after one reaches the target, so
//! sibling sub-paths can be compared by node count and the shortest kept
//! (first one wins ties). That makes the worst case exponential in the
//! branching factor; the trade is deliberate at the graph sizes this crate
//! targets. Recursion depth follows the longest acyclic path explored, so
//! very deep chains can exhaust the stack.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use crate::graph::NodeArena;

/// One path search over the arena.
///
/// Owns the per-call visiting markers, so no traversal state can leak out of
/// a search regardless of how it exits.
pub(crate) struct Tracer<'a, I, D> {
    arena: &'a NodeArena<I, D>,
    visiting: Vec<bool>,
    reservation: usize,
}

impl<'a, I, D> Tracer<'a, I, D>
where
    I: Eq + Hash + Clone + Debug,
{
    /// `reservation` pre-sizes path vectors; it has no effect on results.
    pub(crate) fn new(arena: &'a NodeArena<I, D>, reservation: usize) -> Self {
        Self {
            arena,
            visiting: vec![false; arena.node_count()],
            reservation: reservation.max(1),
        }
    }

    /// Find a path of arena indices from `from` to `to`, inclusive.
    ///
    /// A search from a node to itself succeeds with the single-element path
    /// before any edge is considered, so a self-loop on the target is never
    /// traversed for a zero-hop query.
    pub(crate) fn run(mut self, from: usize, to: usize) -> Option<Vec<usize>> {
        let mut path = Vec::with_capacity(self.reservation);
        if self.search(from, to, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn search(&mut self, current: usize, target: usize, path: &mut Vec<usize>) -> bool {
        // Node already on the active DFS stack: revisiting would loop.
        if self.visiting[current] {
            return false;
        }
        path.push(current);
        if current == target {
            return true;
        }

        self.visiting[current] = true;
        let arena = self.arena;
        let mut best: Option<Vec<usize>> = None;
        for &neighbor in arena.out(current) {
            trace!(
                current = ?arena.id(current),
                neighbor = ?arena.id(neighbor),
                "scanning"
            );
            let mut sub = Vec::with_capacity(self.reservation);
            if self.search(neighbor, target, &mut sub) {
                trace!(len = sub.len(), "candidate sub-path");
                match &best {
                    Some(kept) if sub.len() >= kept.len() => {}
                    _ => best = Some(sub),
                }
            }
        }
        self.visiting[current] = false;

        match best {
            Some(sub) => {
                path.extend(sub);
                true
            }
            None => {
                path.pop();
                false
            }
        }
    }
}
