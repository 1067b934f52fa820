//! In-memory directed graph with path tracing and cycle detection.
//!
//! tracegraph stores nodes and edges keyed by generic identifiers and finds
//! paths between them with a recursive depth-first search that keeps the
//! shortest path discovered among sibling branches.
//!
//! # Features
//!
//! - **Node and Edge Storage**: arena-backed store with generic identifiers
//!   and per-edge payloads, unique per ordered `(from, to)` pair
//! - **Path Tracing**: exhaustive DFS with backtracking, preferring the
//!   fewest-hop path among discovered candidates
//! - **Edge Lookup**: resolve the payload of every edge a traced path crossed
//! - **Cycle Detection**: back-reachability probe per stored edge, memoized
//!   until the next mutation
//! - **Path Cache**: optional memoization keyed by `(from, to)`, cleared on
//!   every mutation so answers never go stale
//! - **Bulk Construction**: build a whole graph from an ordered node/edge list
//!
//! # Quick Start
//!
//! ```rust
//! use tracegraph::TraceGraph;
//!
//! let mut graph = TraceGraph::new();
//! graph.add_node("a")?;
//! graph.add_node("b")?;
//! graph.add_edge(&"a", &"b", "a->b".to_string())?;
//!
//! let path = graph.trace(&"a", &"b")?;
//! assert_eq!(path, vec!["a", "b"]);
//!
//! let payloads = graph.load_edges(&path)?;
//! assert_eq!(payloads[0], "a->b");
//! # Ok::<(), tracegraph::GraphError>(())
//! ```
//!
//! # Semantics worth knowing
//!
//! - "Shortest" means fewest hops among paths the traversal discovers, not a
//!   weighted or breadth-first shortest path.
//! - `trace(x, x)` always succeeds with the single-node path and never
//!   traverses a self-loop on `x`.
//! - Mutation requires exclusive access; queries are `&self` but callers
//!   must still serialize reads against writes externally.

pub mod cache;
pub mod errors;
pub mod graph;

mod trace;

pub use cache::{CacheStats, PathCache};
pub use errors::GraphError;
pub use graph::{EdgeSpec, GraphSource, TraceGraph};
