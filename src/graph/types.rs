use serde::{Deserialize, Serialize};

/// One directed edge in a bulk construction source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeSpec<I, D> {
    pub from: I,
    pub to: I,
    pub data: D,
}

/// Bulk-construction input for a whole graph: node identifiers first, then
/// edge triples, both applied in the order given.
///
/// Construction is not transactional — a failure mid-list leaves the
/// insertions made so far in place and reports the first error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphSource<I, D> {
    pub nodes: Vec<I>,
    pub edges: Vec<EdgeSpec<I, D>>,
}
