//! Declaration types extracted from diagram source.
//!
//! These represent the parsed form of the input text before layout:
//! enums (Direction, NodeShape) and structs (NodeDecl, EdgeDecl, Graph).

use serde::Serialize;

// ─── Direction ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Direction {
    #[default]
    TD,
    LR,
    BT,
    RL,
}

impl Direction {
    /// Parse a direction keyword. `TB` is accepted as an alias of `TD`.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.to_ascii_uppercase().as_str() {
            "TD" | "TB" => Some(Direction::TD),
            "LR" => Some(Direction::LR),
            "BT" => Some(Direction::BT),
            "RL" => Some(Direction::RL),
            _ => None,
        }
    }

    /// True when levels advance along the x axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::LR | Direction::RL)
    }
}

// ─── NodeShape ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    #[default]
    Rectangle, // id[Label]
    Decision, // id{{Label}}
}

// ─── NodeDecl ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDecl {
    /// Short identifier (e.g. "A", "Start").
    pub id: String,
    /// Display label. Falls back to the id when the bracket was empty.
    pub label: String,
    pub shape: NodeShape,
}

impl NodeDecl {
    pub fn new(id: impl Into<String>, label: impl Into<String>, shape: NodeShape) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            shape,
        }
    }
}

// ─── EdgeDecl ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeDecl {
    pub source: String,
    pub target: String,
    /// Inline label from `-- text -->` or `-->|text|`.
    pub label: Option<String>,
}

impl EdgeDecl {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }

    pub fn labeled(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: Some(label.into()),
        }
    }
}

// ─── Graph ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    pub direction: Direction,
    pub nodes: Vec<NodeDecl>,
    pub edges: Vec<EdgeDecl>,
}

impl Graph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_types.rs"]
mod tests;
