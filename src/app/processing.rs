//! Handles the core analysis stages over the loaded edge list.
//!
//! This module includes loading the CSV edge table, building the adjacency
//! graph, enumerating simple paths, and classifying node roles.
//! Each stage reports its progress through the verbose logging macros.

use super::error::AppError;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::edge_loader;
use crate::graph::{DirectedGraph, EdgeRecord, NodeId};
use crate::path::PathScraper;
use crate::stats::{self, NodeClassification};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Loads the directed edge list from the specified CSV file.
///
/// # Arguments
/// * `edges_file_path` - Path to the CSV edge file.
/// * `quiet_mode` - Suppresses verbose logging if true.
///
/// # Returns
/// A `Result` containing the ordered edge records on success,
/// or an `AppError` on failure (e.g., invalid path, missing column).
pub fn load_edges_from_file(
    edges_file_path: &PathBuf,
    quiet_mode: bool,
) -> Result<Vec<EdgeRecord>, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading edge list from CSV...");
    let edges_file_str = edges_file_path
        .to_str()
        .ok_or_else(|| AppError::InvalidPath(edges_file_path.display().to_string()))?;

    let edges = edge_loader::load_edges_from_file(edges_file_str)?;

    verbose_println!(quiet_mode, "   => Loaded {} edge(s).", edges.len());
    Ok(edges)
}

/// Builds the adjacency graph from the loaded edges.
///
/// Graph details are written to the shared graph log writer unless running
/// in quiet mode; a failed write is logged and does not abort the analysis.
pub fn build_graph(
    edges: &[EdgeRecord],
    quiet_mode: bool,
    graph_log_writer: &mut BufWriter<File>,
) -> DirectedGraph {
    verbose_println!(quiet_mode, "[STEP 2] Building adjacency graph...");
    let graph = DirectedGraph::from_edges(edges);
    verbose_println!(
        quiet_mode,
        "   => {} node(s), {} edge(s), {} node(s) with outgoing edges.",
        graph.node_count(),
        graph.edge_count(),
        graph.source_nodes().len()
    );

    if !quiet_mode {
        verbose_println!(
            quiet_mode,
            "   => Logging graph details to graph_details.log..."
        );
        if let Err(e) = graph.print_details_to_writer(graph_log_writer) {
            verbose_eprintln!(
                quiet_mode,
                "   [ERROR] Failed to write graph details: {}",
                e
            );
            // Continue; the details log is non-critical for the analysis.
        }
    }

    graph
}

/// Enumerates all simple paths in the graph.
///
/// Returns an empty vector when enumeration produced nothing (e.g., every
/// branch closed a cycle); the report still prints a zero total.
pub fn enumerate_paths(graph: &DirectedGraph, quiet_mode: bool) -> Vec<Vec<NodeId>> {
    verbose_println!(quiet_mode, "[STEP 3] Enumerating simple paths...");
    match PathScraper::get_paths(graph) {
        Some(paths) => {
            verbose_println!(quiet_mode, "   => Found {} path(s).", paths.len());
            paths
        }
        None => {
            verbose_println!(quiet_mode, "   => No sink-terminated paths found.");
            Vec::new()
        }
    }
}

/// Computes node statistics over the full node universe and derives roles.
pub fn classify_nodes(graph: &DirectedGraph, quiet_mode: bool) -> NodeClassification {
    verbose_println!(
        quiet_mode,
        "[STEP 4] Computing node statistics and roles..."
    );
    let node_stats = stats::compute_node_stats(graph);
    let classification = stats::classify(&node_stats);
    verbose_println!(
        quiet_mode,
        "   => {} source-only, {} passthrough, {} high-degree node(s).",
        classification.source_only.len(),
        classification.passthrough.len(),
        classification.high_degree.len()
    );
    classification
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn pipeline_analyzes_chain_csv_end_to_end() {
        let mut csv_file = NamedTempFile::new().unwrap();
        csv_file
            .write_all(b"Source,Target\nA,B\nB,C\nC,D\n")
            .unwrap();
        csv_file.flush().unwrap();

        let edges = load_edges_from_file(&csv_file.path().to_path_buf(), true).unwrap();
        assert_eq!(edges.len(), 3);

        let log_file = NamedTempFile::new().unwrap();
        let mut log_writer = BufWriter::new(log_file.reopen().unwrap());
        let graph = build_graph(&edges, true, &mut log_writer);

        let paths = enumerate_paths(&graph, true);
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0].join(" -> "), "A -> B -> C -> D");

        let classification = classify_nodes(&graph, true);
        assert_eq!(classification.source_only, ["A"]);
        assert_eq!(classification.passthrough.len(), 2);
        assert!(classification.high_degree.is_empty());
    }
}
