mod store;
mod trace_graph;
mod types;

pub(crate) use store::NodeArena;
pub use trace_graph::TraceGraph;
pub use types::{EdgeSpec, GraphSource};
