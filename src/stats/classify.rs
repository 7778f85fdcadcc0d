// classify.rs
// ──────────────────────────────────────────────────────────────────────────────
// Node role classification over the full node universe (union of all edge
// sources and targets).  Three independent roles are derived from per-node
// source/target appearance counts: source-only entrypoints, degree-2
// passthrough nodes, and high-degree hubs.  A node with zero total degree
// cannot occur, since every node comes from at least one edge column.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::BTreeMap;
use std::io::Write;

use crate::graph::{DirectedGraph, NodeId};

/// Per-node appearance counts over the edge table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NodeStats {
    /// Times the node appears in the source column.
    pub source_count: usize,
    /// Times the node appears in the target column.
    pub target_count: usize,
}

impl NodeStats {
    pub fn total_degree(&self) -> usize {
        self.source_count + self.target_count
    }
}

/// Node roles derived from `NodeStats`, each listed in sorted NodeId order.
#[derive(Clone, Debug, Default)]
pub struct NodeClassification {
    /// Nodes present in the source column but never in the target column.
    pub source_only: Vec<NodeId>,
    /// Nodes with exactly one source and one target appearance.
    pub passthrough: Vec<(NodeId, NodeStats)>,
    /// Nodes with total degree of at least 3.
    pub high_degree: Vec<(NodeId, NodeStats)>,
}

/// Computes appearance counts for every node in the graph.
///
/// A `BTreeMap` keeps the universe sorted by NodeId, which fixes the
/// ordering of every derived report.
pub fn compute_node_stats(graph: &DirectedGraph) -> BTreeMap<NodeId, NodeStats> {
    let mut stats: BTreeMap<NodeId, NodeStats> = BTreeMap::new();
    for (source, successors) in graph.get_graph() {
        stats.entry(source.clone()).or_default().source_count += successors.len();
        for target in successors {
            stats.entry(target.clone()).or_default().target_count += 1;
        }
    }
    stats
}

/// Splits the node universe into the three reported roles.
pub fn classify(stats: &BTreeMap<NodeId, NodeStats>) -> NodeClassification {
    let mut classification = NodeClassification::default();

    for (node, node_stats) in stats {
        if node_stats.source_count > 0 && node_stats.target_count == 0 {
            classification.source_only.push(node.clone());
        }
        // Both counts are checked individually: a 2+0 or 0+2 degree split
        // must not qualify as a passthrough node.
        if node_stats.source_count == 1 && node_stats.target_count == 1 {
            classification.passthrough.push((node.clone(), *node_stats));
        }
        if node_stats.total_degree() >= 3 {
            classification.high_degree.push((node.clone(), *node_stats));
        }
    }

    classification
}

/// Prints the three role reports, each followed by its total count.
pub fn print_classification_to_writer(
    classification: &NodeClassification,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Nodes that appear only as Source (not as Target):")?;
    for node in &classification.source_only {
        writeln!(writer, "{}", node)?;
    }
    writeln!(writer)?;
    writeln!(writer, "Total count: {}", classification.source_only.len())?;

    writeln!(writer)?;
    writeln!(writer, "Nodes with exactly one source and one target:")?;
    for (node, stats) in &classification.passthrough {
        writeln!(
            writer,
            "{}: source_count={}, target_count={}",
            node, stats.source_count, stats.target_count
        )?;
    }
    writeln!(writer)?;
    writeln!(writer, "Total count: {}", classification.passthrough.len())?;

    writeln!(writer)?;
    writeln!(writer, "High degree nodes (degree >= 3):")?;
    for (node, stats) in &classification.high_degree {
        writeln!(
            writer,
            "{}: source_count={}, target_count={}, total_degree={}",
            node,
            stats.source_count,
            stats.target_count,
            stats.total_degree()
        )?;
    }
    writeln!(writer)?;
    writeln!(writer, "Total count: {}", classification.high_degree.len())?;
    Ok(())
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

    #[test]
    fn chain_stats_cover_the_full_node_universe() {
        let graph = graph_from(&[("A", "B"), ("B", "C"), ("C", "D")]);

        let stats = compute_node_stats(&graph);
        assert_eq!(stats.len(), 4);
        assert_eq!(stats["A"], NodeStats { source_count: 1, target_count: 0 });
        assert_eq!(stats["B"], NodeStats { source_count: 1, target_count: 1 });
        assert_eq!(stats["D"], NodeStats { source_count: 0, target_count: 1 });
    }

    #[test]
    fn chain_classification_matches_roles() {
        let graph = graph_from(&[("A", "B"), ("B", "C"), ("C", "D")]);

        let classification = classify(&compute_node_stats(&graph));
        assert_eq!(classification.source_only, ["A"]);
        let passthrough: Vec<&str> = classification
            .passthrough
            .iter()
            .map(|(node, _)| node.as_str())
            .collect();
        assert_eq!(passthrough, ["B", "C"]);
        assert!(classification.high_degree.is_empty());
    }

    #[test]
    fn degree_two_requires_one_source_and_one_target() {
        // A has total degree 2, but split 2+0, so it must not be a passthrough.
        let graph = graph_from(&[("A", "B"), ("A", "C")]);

        let classification = classify(&compute_node_stats(&graph));
        assert!(classification.passthrough.is_empty());
        assert_eq!(classification.source_only, ["A"]);
    }

    #[test]
    fn hub_node_reports_degree_breakdown() {
        let graph = graph_from(&[("A", "H"), ("B", "H"), ("H", "C")]);

        let classification = classify(&compute_node_stats(&graph));
        assert_eq!(
            classification.high_degree,
            [(
                "H".to_string(),
                NodeStats { source_count: 1, target_count: 2 }
            )]
        );
    }

    #[test]
    fn parallel_edges_count_each_appearance() {
        let graph = graph_from(&[("A", "B"), ("A", "B")]);

        let stats = compute_node_stats(&graph);
        assert_eq!(stats["A"], NodeStats { source_count: 2, target_count: 0 });
        assert_eq!(stats["B"], NodeStats { source_count: 0, target_count: 2 });

        let classification = classify(&stats);
        assert!(classification.passthrough.is_empty());
    }

    #[test]
    fn reports_are_sorted_by_node_id() {
        let graph = graph_from(&[("C", "X"), ("A", "Y"), ("B", "Z")]);

        let classification = classify(&compute_node_stats(&graph));
        assert_eq!(classification.source_only, ["A", "B", "C"]);
    }

    #[test]
    fn classification_report_prints_sections_and_counts() {
        let graph = graph_from(&[("A", "B"), ("B", "C"), ("C", "D")]);
        let classification = classify(&compute_node_stats(&graph));

        let mut out = Vec::new();
        print_classification_to_writer(&classification, &mut out).unwrap();

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("Nodes that appear only as Source (not as Target):"));
        assert!(report.contains("Nodes with exactly one source and one target:"));
        assert!(report.contains("B: source_count=1, target_count=1"));
        assert!(report.contains("High degree nodes (degree >= 3):"));
        assert!(report.contains("Total count: 0"));
    }
}
