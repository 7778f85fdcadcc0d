// graph module
mod graph;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the graph module.
//─────────────────────────────────────────────────────────────────────────────
pub use graph::{DirectedGraph, EdgeRecord, NodeId};
