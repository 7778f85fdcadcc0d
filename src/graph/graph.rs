// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// Build a directed adjacency graph from an ordered edge list.  Every edge
// appends its target to the successor list of its source, so parallel edges
// stay as repeated successor entries.  Nodes that never appear as a source
// carry no adjacency entry at all; absence of a key is what marks a sink.
// The graph is built in a single pass and never mutated afterwards.
// ──────────────────────────────────────────────────────────────────────────────
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::io::Write;

/// Represents a unique identifier for a node in the graph.
///
/// Any CSV cell value is accepted as a label, so labels stay as owned strings.
pub type NodeId = String;

/// One directed edge, deserialized from a `Source`/`Target` CSV row.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct EdgeRecord {
    #[serde(rename = "Source")]
    pub source: NodeId,
    #[serde(rename = "Target")]
    pub target: NodeId,
}

/// Represents a directed graph as an adjacency mapping.
///
/// `source_order` remembers the first-appearance order of every source key,
/// because enumeration and reporting must iterate sources in edge input
/// order and `HashMap` iteration order is arbitrary.
#[derive(Clone, Debug, Default)]
pub struct DirectedGraph {
    graph: HashMap<NodeId, Vec<NodeId>>,
    source_order: Vec<NodeId>,
    edge_count: usize,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self {
            graph: HashMap::new(),
            source_order: Vec::new(),
            edge_count: 0,
        }
    }

    /// Builds the adjacency mapping from an ordered edge list.
    pub fn from_edges(edges: &[EdgeRecord]) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(&edge.source, &edge.target);
        }
        graph
    }

    /// Appends `target` to the successor list of `source`, creating the list
    /// (and recording the key's position) on first occurrence.  Parallel
    /// edges are kept, not deduplicated.
    fn add_edge(&mut self, source: &NodeId, target: &NodeId) {
        if !self.graph.contains_key(source) {
            self.source_order.push(source.clone());
        }
        self.graph
            .entry(source.clone())
            .or_default()
            .push(target.clone());
        self.edge_count += 1;
    }

    /// Returns a reference to the adjacency mapping.
    pub fn get_graph(&self) -> &HashMap<NodeId, Vec<NodeId>> {
        &self.graph
    }

    /// Returns the successors of `node` in edge input order, or `None` when
    /// the node has no outgoing edges (a sink, or a label not in the graph).
    pub fn get_successors(&self, node: &NodeId) -> Option<&[NodeId]> {
        self.graph.get(node).map(Vec::as_slice)
    }

    /// Returns every node with at least one outgoing edge, in the order the
    /// sources first appeared in the input.
    pub fn source_nodes(&self) -> &[NodeId] {
        &self.source_order
    }

    /// Returns the number of edges the graph was built from.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the size of the node universe (union of sources and targets).
    pub fn node_count(&self) -> usize {
        let mut nodes: HashSet<&NodeId> = self.graph.keys().collect();
        for successors in self.graph.values() {
            nodes.extend(successors.iter());
        }
        nodes.len()
    }

    /// Writes the adjacency mapping to the given writer, one block per
    /// source node in sorted order for a consistent log layout.
    pub fn print_details_to_writer(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "=== DIRECTED GRAPH ===")?;
        writeln!(writer, "Nodes: {}", self.node_count())?;
        writeln!(writer, "Edges: {}", self.edge_count)?;
        writeln!(writer)?;

        let mut sources: Vec<&NodeId> = self.graph.keys().collect();
        sources.sort(); // Print sources in a consistent order

        for source in sources {
            writeln!(writer, "Node: {}", source)?;
            if let Some(successors) = self.get_successors(source) {
                writeln!(writer, "  Successors: {}", successors.join(", "))?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}
