use std::fmt::Debug;
use std::hash::Hash;

use ahash::AHashMap;

use crate::errors::GraphError;

struct Node<I> {
    id: I,
    out: Vec<usize>,
}

/// Dense node arena plus the ordered-pair edge map.
///
/// Nodes are referenced by arena index everywhere inside the crate. Indices
/// never move because the graph has no removal API, so traced paths and
/// cached paths stay valid until the next insertion clears them.
pub(crate) struct NodeArena<I, D> {
    nodes: Vec<Node<I>>,
    index: AHashMap<I, usize>,
    edges: AHashMap<(usize, usize), D>,
}

impl<I, D> NodeArena<I, D>
where
    I: Eq + Hash + Clone + Debug,
{
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: AHashMap::new(),
            edges: AHashMap::new(),
        }
    }

    /// Insert a node with a unique identifier. Validation happens before any
    /// mutation, so a rejected insert leaves the arena exactly as it was.
    pub(crate) fn insert_node(&mut self, id: I) -> Result<usize, GraphError> {
        if self.index.contains_key(&id) {
            return Err(GraphError::duplicate_node(format!("{id:?}")));
        }
        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push(Node { id, out: Vec::new() });
        Ok(idx)
    }

    /// Insert an edge between two existing nodes. The ordered `(from, to)`
    /// pair must be unique; the reverse pair and self-loops are distinct.
    pub(crate) fn insert_edge(&mut self, from: &I, to: &I, data: D) -> Result<(), GraphError> {
        let to_idx = self.lookup(to)?;
        let from_idx = self.lookup(from)?;
        if self.edges.contains_key(&(from_idx, to_idx)) {
            return Err(GraphError::duplicate_edge(format!("{from:?} -> {to:?}")));
        }
        self.edges.insert((from_idx, to_idx), data);
        self.nodes[from_idx].out.push(to_idx);
        Ok(())
    }

    pub(crate) fn lookup(&self, id: &I) -> Result<usize, GraphError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::unknown_node(format!("{id:?}")))
    }

    pub(crate) fn contains(&self, id: &I) -> bool {
        self.index.contains_key(id)
    }

    pub(crate) fn id(&self, idx: usize) -> &I {
        &self.nodes[idx].id
    }

    /// Outgoing neighbor indices in insertion order.
    pub(crate) fn out(&self, idx: usize) -> &[usize] {
        &self.nodes[idx].out
    }

    pub(crate) fn edge(&self, from_idx: usize, to_idx: usize) -> Option<&D> {
        self.edges.get(&(from_idx, to_idx))
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterate `(index, outgoing)` for every node in insertion order.
    pub(crate) fn iter_out(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (idx, node.out.as_slice()))
    }
}
