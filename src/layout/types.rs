//! Layout output types: Point, PositionedNode, CompiledDiagram.

use serde::Serialize;

use crate::style::NodeColors;
use crate::syntax::types::{Direction, EdgeDecl, NodeDecl, NodeShape};

// ─── Point ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── PositionedNode ──────────────────────────────────────────────────────────

/// A node declaration with its computed level, position and colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode {
    pub id: String,
    pub label: String,
    pub shape: NodeShape,
    pub level: usize,
    pub x: f64,
    pub y: f64,
    pub colors: NodeColors,
}

impl PositionedNode {
    pub fn new(decl: &NodeDecl, level: usize, at: Point, colors: NodeColors) -> Self {
        Self {
            id: decl.id.clone(),
            label: decl.label.clone(),
            shape: decl.shape,
            level,
            x: at.x,
            y: at.y,
            colors,
        }
    }
}

// ─── CompiledDiagram ─────────────────────────────────────────────────────────

/// Everything the render adapter needs: positioned nodes in declaration
/// order and edges in declaration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CompiledDiagram {
    pub direction: Direction,
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<EdgeDecl>,
}

impl CompiledDiagram {
    /// An empty node list is the only failure signal callers need to handle.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
