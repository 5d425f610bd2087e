//! GraphIR — wraps the declared graph in a petgraph DiGraph for traversal.
//!
//! Only edges whose endpoints are both declared become petgraph edges;
//! dangling edges stay in the `Graph` edge list for the render adapter
//! to deal with.

use std::collections::HashMap;

use petgraph::Direction as PetDirection;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::trace;

use crate::syntax::types::{Graph, NodeDecl};

/// Graph intermediate representation used by the layout engine.
pub struct GraphIR {
    /// Node weight is the node id; edge weight is the edge label.
    pub digraph: DiGraph<String, Option<String>>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<String, NodeIndex>,
    /// In-degree per declared node, counted over every edge in the source
    /// list whose target is that node.
    in_degrees: HashMap<String, usize>,
}

impl GraphIR {
    pub fn from_graph(graph: &Graph) -> Self {
        let mut digraph: DiGraph<String, Option<String>> = DiGraph::new();
        let mut node_index: HashMap<String, NodeIndex> = HashMap::new();

        for NodeDecl { id, .. } in &graph.nodes {
            if !node_index.contains_key(id) {
                let idx = digraph.add_node(id.clone());
                node_index.insert(id.clone(), idx);
            }
        }

        let mut in_degrees: HashMap<String, usize> =
            node_index.keys().map(|id| (id.clone(), 0)).collect();

        for edge in &graph.edges {
            if let Some(count) = in_degrees.get_mut(&edge.target) {
                *count += 1;
            }
            match (node_index.get(&edge.source), node_index.get(&edge.target)) {
                (Some(&from), Some(&to)) => {
                    digraph.add_edge(from, to, edge.label.clone());
                }
                _ => trace!(source = %edge.source, target = %edge.target, "dangling edge"),
            }
        }

        Self {
            digraph,
            node_index,
            in_degrees,
        }
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.digraph.edge_count()
    }

    pub fn in_degree(&self, id: &str) -> usize {
        self.in_degrees.get(id).copied().unwrap_or(0)
    }

    /// All node ids, sorted lexically.
    pub fn sorted_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.node_index.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Root candidates: in-degree 0 nodes in lexical order.
    ///
    /// When every node has an incoming edge, the lexically smallest node
    /// is the single root. Empty only for an empty graph.
    pub fn roots(&self) -> Vec<&str> {
        let ids = self.sorted_ids();
        let roots: Vec<&str> = ids
            .iter()
            .copied()
            .filter(|id| self.in_degree(id) == 0)
            .collect();
        if roots.is_empty() {
            ids.into_iter().take(1).collect()
        } else {
            roots
        }
    }

    /// Distinct successor ids of a node, sorted lexically.
    pub fn successors(&self, id: &str) -> Vec<&str> {
        let Some(&idx) = self.node_index.get(id) else {
            return Vec::new();
        };
        let mut next: Vec<&str> = self
            .digraph
            .neighbors_directed(idx, PetDirection::Outgoing)
            .map(|n| self.digraph[n].as_str())
            .collect();
        next.sort_unstable();
        next.dedup();
        next
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_graph.rs"]
mod tests;
