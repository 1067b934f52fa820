use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::cache::{CacheStats, PathCache};
use crate::errors::GraphError;
use crate::trace::Tracer;

use super::store::NodeArena;
use super::types::GraphSource;

/// In-memory directed graph with path tracing and cycle detection.
///
/// Node identifiers are generic (`Eq + Hash + Clone + Debug`); edge payloads
/// carry arbitrary data resolved per path hop via [`TraceGraph::load_edges`].
/// Traced paths are memoized in an optional cache that is cleared on every
/// mutation, so cached answers never diverge from the current store.
///
/// Mutation requires `&mut self`; queries take `&self` and are internally
/// lock-correct, but the graph is not designed for reads racing mutation —
/// callers sharing one across threads must serialize all access.
pub struct TraceGraph<I, D> {
    arena: NodeArena<I, D>,
    cache: PathCache<(I, I)>,
    cyclic: AtomicBool,
}

impl<I, D> TraceGraph<I, D>
where
    I: Eq + Hash + Clone + Debug,
{
    /// Create an empty graph with the path cache enabled.
    pub fn new() -> Self {
        Self::with_cache(true)
    }

    pub fn with_cache(cache_enabled: bool) -> Self {
        Self {
            arena: NodeArena::new(),
            cache: PathCache::new(cache_enabled),
            cyclic: AtomicBool::new(false),
        }
    }

    /// Add a node with a unique identifier.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if the identifier is already
    /// present, leaving the store and cache untouched.
    pub fn add_node(&mut self, id: I) -> Result<(), GraphError> {
        self.arena.insert_node(id)?;
        self.invalidate();
        Ok(())
    }

    /// Add a directed edge between two existing nodes.
    ///
    /// The ordered `(from, to)` pair must not already carry an edge; the
    /// reverse pair is a distinct edge, as is a self-loop. Fails with
    /// [`GraphError::UnknownNode`] or [`GraphError::DuplicateEdge`] without
    /// mutating anything.
    pub fn add_edge(&mut self, from: &I, to: &I, data: D) -> Result<(), GraphError> {
        self.arena.insert_edge(from, to, data)?;
        self.invalidate();
        debug!(?from, ?to, "edge added");
        Ok(())
    }

    /// Build the graph from a bulk source: all nodes in order, then all
    /// edges in order. Stops at and returns the first failure; insertions
    /// made before the failure remain in place.
    pub fn build_from(&mut self, source: GraphSource<I, D>) -> Result<(), GraphError> {
        for id in source.nodes {
            self.add_node(id)?;
        }
        for edge in source.edges {
            self.add_edge(&edge.from, &edge.to, edge.data)?;
        }
        Ok(())
    }

    /// Find a path from `from` to `to`, preferring the shortest discovered.
    ///
    /// Returns the full node sequence, source and destination inclusive.
    /// A query from a node to itself yields the single-element path without
    /// traversing any edge, self-loop or not. Unknown endpoints report
    /// [`GraphError::UnknownNode`], distinct from [`GraphError::NoPathFound`].
    pub fn trace(&self, from: &I, to: &I) -> Result<Vec<I>, GraphError> {
        let to_idx = self.arena.lookup(to)?;
        let from_idx = self.arena.lookup(from)?;

        let key = if self.cache.is_enabled() {
            let key = (from.clone(), to.clone());
            if let Some(path) = self.cache.get(&key) {
                return Ok(self.resolve(&path));
            }
            Some(key)
        } else {
            None
        };

        let path = Tracer::new(&self.arena, self.cache.reservation())
            .run(from_idx, to_idx)
            .ok_or_else(|| GraphError::no_path_found(format!("{from:?} -> {to:?}")))?;

        let ids = self.resolve(&path);
        if let Some(key) = key {
            self.cache.insert(key, path);
        }
        Ok(ids)
    }

    /// Resolve the payload of every edge crossed by `path`.
    ///
    /// Requires at least two nodes and a stored edge behind every
    /// consecutive pair; anything less fails the whole request with
    /// [`GraphError::InvalidPath`] — partial results are never returned.
    pub fn load_edges(&self, path: &[I]) -> Result<Vec<&D>, GraphError> {
        if path.len() < 2 {
            return Err(GraphError::invalid_path(format!(
                "path of {} node(s) has no edges to load",
                path.len()
            )));
        }
        let mut result = Vec::with_capacity(path.len() - 1);
        for pair in path.windows(2) {
            let from_idx = self.arena.lookup(&pair[0])?;
            let to_idx = self.arena.lookup(&pair[1])?;
            let data = self.arena.edge(from_idx, to_idx).ok_or_else(|| {
                GraphError::invalid_path(format!("no edge {:?} -> {:?}", pair[0], pair[1]))
            })?;
            result.push(data);
        }
        Ok(result)
    }

    /// Report whether the graph contains any cycle.
    ///
    /// A positive answer is memoized until the next mutation; a negative one
    /// is recomputed on every call. Probes run on the tracer directly, so
    /// cycle checking never populates the path cache. Self-loops count.
    ///
    /// Cost is one full path search per stored edge — expensive on dense
    /// graphs, acceptable at the sizes this crate targets.
    pub fn contains_cycles(&self) -> bool {
        if self.cyclic.load(Ordering::Relaxed) {
            return true;
        }
        for (idx, out) in self.arena.iter_out() {
            for &neighbor in out {
                let back = Tracer::new(&self.arena, self.cache.reservation());
                if back.run(neighbor, idx).is_some() {
                    debug!(node = ?self.arena.id(idx), "cycle found");
                    self.cyclic.store(true, Ordering::Relaxed);
                    return true;
                }
            }
        }
        false
    }

    /// Enable or disable the path cache. Entries are dropped either way.
    pub fn toggle_cache(&self, enabled: bool) {
        self.cache.set_enabled(enabled);
    }

    /// Drop all cached paths without touching the store.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Re-derive the trace pre-allocation hint from the average cached path
    /// length. Fails with [`GraphError::CacheUnavailable`] when caching is
    /// disabled or nothing has been cached yet.
    pub fn optimize_trace(&self) -> Result<(), GraphError> {
        match self.cache.refresh_reservation() {
            Some(reservation) => {
                debug!(reservation, "trace reservation updated");
                Ok(())
            }
            None => Err(GraphError::cache_unavailable(
                "caching disabled or cache empty",
            )),
        }
    }

    pub fn contains_node(&self, id: &I) -> bool {
        self.arena.contains(id)
    }

    /// Outgoing neighbor identifiers of `id` in insertion order.
    pub fn neighbors(&self, id: &I) -> Result<Vec<I>, GraphError> {
        let idx = self.arena.lookup(id)?;
        Ok(self.resolve(self.arena.out(idx)))
    }

    pub fn node_count(&self) -> usize {
        self.arena.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.arena.edge_count()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn resolve(&self, path: &[usize]) -> Vec<I> {
        path.iter().map(|&idx| self.arena.id(idx).clone()).collect()
    }

    // Any mutation can shorten an existing best path or introduce a cycle.
    fn invalidate(&mut self) {
        self.cache.clear();
        self.cyclic.store(false, Ordering::Relaxed);
    }
}

impl<I, D> Default for TraceGraph<I, D>
where
    I: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
