//! GraphBuilder — first-seen node dedup plus the no-edges fallback.
//!
//! The extractor feeds declarations in source order; `finish` turns them
//! into the final `Graph`.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::types::{Direction, EdgeDecl, Graph, NodeDecl};

#[derive(Debug, Default)]
pub struct GraphBuilder {
    direction: Direction,
    nodes: Vec<NodeDecl>,
    seen: HashSet<String>,
    edges: Vec<EdgeDecl>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Add a node declaration. Returns false (and keeps the earlier one)
    /// if the id was already declared.
    pub fn add_node(&mut self, node: NodeDecl) -> bool {
        if self.seen.contains(&node.id) {
            trace!(id = %node.id, "ignoring redeclared node");
            return false;
        }
        self.seen.insert(node.id.clone());
        self.nodes.push(node);
        true
    }

    pub fn add_edge(&mut self, edge: EdgeDecl) {
        self.edges.push(edge);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Finalize the graph.
    ///
    /// With zero edges and at least two nodes, a path through the nodes in
    /// declaration order is synthesized. Any recovered edge disables this.
    pub fn finish(self) -> Graph {
        let Self {
            direction,
            nodes,
            mut edges,
            ..
        } = self;

        if edges.is_empty() && nodes.len() >= 2 {
            debug!(nodes = nodes.len(), "no edges recovered; synthesizing path");
            edges = nodes
                .windows(2)
                .map(|pair| EdgeDecl::new(pair[0].id.clone(), pair[1].id.clone()))
                .collect();
        }

        Graph {
            direction,
            nodes,
            edges,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_builder.rs"]
mod tests;
