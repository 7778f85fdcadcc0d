use std::io::Write;

use crate::graph::{DirectedGraph, NodeId};

/// `PathScraper` is responsible for finding all simple paths in a `DirectedGraph`.
pub struct PathScraper;

impl PathScraper {
    /// Returns all simple (cycle-free) paths in the graph.
    ///
    /// Enumeration starts from every node with at least one outgoing edge,
    /// in edge input order, and follows successors until a sink is reached.
    /// Returns `None` if no paths are found.
    pub fn get_paths(graph: &DirectedGraph) -> Option<Vec<Vec<NodeId>>> {
        let mut all_paths: Vec<Vec<NodeId>> = Vec::new();
        // Shared walk buffer; empty again between start nodes because every
        // push in `traverse` is matched by a pop on return.
        let mut current_path: Vec<NodeId> = Vec::new();

        for start_node in graph.source_nodes() {
            Self::traverse(graph, start_node, &mut current_path, &mut all_paths);
            debug_assert!(current_path.is_empty());
        }

        // Return None if no paths were found, otherwise Some(paths).
        if all_paths.is_empty() {
            None
        } else {
            Some(all_paths)
        }
    }

    /// Performs a depth-first, backtracking walk collecting every path that
    /// terminates at a sink.
    ///
    /// A branch reaching a node already on `current_path` would close a
    /// cycle; that branch is abandoned without recording anything, so only
    /// sink-terminated branches produce output.  The truncated prefix is
    /// intentionally not emitted.
    fn traverse(
        graph: &DirectedGraph,
        node: &NodeId,
        current_path: &mut Vec<NodeId>,
        all_paths: &mut Vec<Vec<NodeId>>,
    ) {
        if current_path.iter().any(|visited| visited == node) {
            return;
        }

        current_path.push(node.clone());

        match graph.get_successors(node) {
            // No outgoing edges: the current path is maximal.
            None => all_paths.push(current_path.clone()),
            Some(successors) => {
                for next_node in successors {
                    Self::traverse(graph, next_node, current_path, all_paths);
                }
            }
        }

        current_path.pop();
    }

    /// Prints the numbered path report to the given writer.
    ///
    /// Path numbering is 1-based; the total line is printed even when no
    /// paths were found.
    pub fn print_paths_to_writer(
        paths: &[Vec<NodeId>],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "All possible paths (avoiding cycles):")?;
        for (i, path) in paths.iter().enumerate() {
            writeln!(writer, "Path {}: {}", i + 1, path.join(" -> "))?;
        }
        writeln!(writer)?;
        writeln!(writer, "Total number of paths: {}", paths.len())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeRecord;

    fn graph_from(edges: &[(&str, &str)]) -> DirectedGraph {
        let records: Vec<EdgeRecord> = edges
            .iter()
            .map(|(source, target)| EdgeRecord {
                source: source.to_string(),
                target: target.to_string(),
            })
            .collect();
        DirectedGraph::from_edges(&records)
    }

    fn path_of(nodes: &[&str]) -> Vec<NodeId> {
        nodes.iter().map(|node| node.to_string()).collect()
    }

    #[test]
    fn chain_yields_one_path_per_start_node() {
        let graph = graph_from(&[("A", "B"), ("B", "C"), ("C", "D")]);

        let paths = PathScraper::get_paths(&graph).unwrap();
        assert_eq!(
            paths,
            vec![
                path_of(&["A", "B", "C", "D"]),
                path_of(&["B", "C", "D"]),
                path_of(&["C", "D"]),
            ]
        );
    }

    #[test]
    fn self_loop_yields_no_paths() {
        let graph = graph_from(&[("A", "A")]);

        assert!(PathScraper::get_paths(&graph).is_none());
    }

    #[test]
    fn two_node_cycle_yields_no_paths() {
        let graph = graph_from(&[("A", "B"), ("B", "A")]);

        assert!(PathScraper::get_paths(&graph).is_none());
    }

    #[test]
    fn branch_closing_a_cycle_is_discarded_not_truncated() {
        // B's cycle branch back to A is dropped; only the escape via C remains.
        let graph = graph_from(&[("A", "B"), ("B", "A"), ("B", "C")]);

        let paths = PathScraper::get_paths(&graph).unwrap();
        assert_eq!(paths, vec![path_of(&["A", "B", "C"]), path_of(&["B", "C"])]);
    }

    #[test]
    fn reconvergent_branches_each_produce_a_path() {
        let graph = graph_from(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")]);

        let paths = PathScraper::get_paths(&graph).unwrap();
        assert_eq!(
            paths,
            vec![
                path_of(&["A", "B", "D"]),
                path_of(&["A", "C", "D"]),
                path_of(&["B", "D"]),
                path_of(&["C", "D"]),
            ]
        );
    }

    #[test]
    fn parallel_edges_produce_repeated_paths() {
        let graph = graph_from(&[("A", "B"), ("A", "B")]);

        let paths = PathScraper::get_paths(&graph).unwrap();
        assert_eq!(paths, vec![path_of(&["A", "B"]), path_of(&["A", "B"])]);
    }

    #[test]
    fn every_path_is_simple_and_ends_at_a_sink() {
        let graph = graph_from(&[
            ("A", "B"),
            ("B", "C"),
            ("B", "D"),
            ("C", "A"),
            ("D", "E"),
        ]);

        let paths = PathScraper::get_paths(&graph).unwrap();
        assert!(!paths.is_empty());
        for path in &paths {
            for (i, node) in path.iter().enumerate() {
                assert!(!path[i + 1..].contains(node), "repeated node in {:?}", path);
            }
            let last = path.last().unwrap();
            assert!(graph.get_successors(last).is_none(), "{} is not a sink", last);
        }
    }

    #[test]
    fn enumeration_is_deterministic() {
        let graph = graph_from(&[("A", "B"), ("A", "C"), ("C", "D"), ("B", "D")]);

        let first = PathScraper::get_paths(&graph);
        let second = PathScraper::get_paths(&graph);
        assert_eq!(first, second);
    }

    #[test]
    fn path_report_lists_paths_and_total() {
        let paths = vec![path_of(&["A", "B", "C"]), path_of(&["B", "C"])];

        let mut out = Vec::new();
        PathScraper::print_paths_to_writer(&paths, &mut out).unwrap();

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("All possible paths (avoiding cycles):"));
        assert!(report.contains("Path 1: A -> B -> C"));
        assert!(report.contains("Path 2: B -> C"));
        assert!(report.contains("Total number of paths: 2"));
    }

    #[test]
    fn path_report_prints_zero_total_without_paths() {
        let mut out = Vec::new();
        PathScraper::print_paths_to_writer(&[], &mut out).unwrap();

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("Total number of paths: 0"));
    }
}
