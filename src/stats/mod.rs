// classify module
mod classify;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the classify module.
//─────────────────────────────────────────────────────────────────────────────
pub use classify::{
    classify, compute_node_stats, print_classification_to_writer, NodeClassification, NodeStats,
};
