//! Node color assignment.
//!
//! Colors cycle through a fixed palette in declaration order. Shape, level
//! and edges have no influence.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeColors {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

impl NodeColors {
    const fn new(background: &'static str, border: &'static str, text: &'static str) -> Self {
        Self {
            background,
            border,
            text,
        }
    }
}

pub const PALETTE: [NodeColors; 8] = [
    NodeColors::new("#dbeafe", "#2563eb", "#1e3a8a"), // blue
    NodeColors::new("#dcfce7", "#16a34a", "#14532d"), // green
    NodeColors::new("#fef3c7", "#d97706", "#78350f"), // amber
    NodeColors::new("#fce7f3", "#db2777", "#831843"), // pink
    NodeColors::new("#ede9fe", "#7c3aed", "#4c1d95"), // violet
    NodeColors::new("#cffafe", "#0891b2", "#164e63"), // cyan
    NodeColors::new("#fee2e2", "#dc2626", "#7f1d1d"), // red
    NodeColors::new("#f3f4f6", "#4b5563", "#111827"), // gray
];

/// Color for the node at `index` in declaration order.
pub fn color_for(index: usize) -> NodeColors {
    PALETTE[index % PALETTE.len()]
}

/// Colors for `count` nodes in declaration order.
pub fn assign_colors(count: usize) -> Vec<NodeColors> {
    (0..count).map(color_for).collect()
}

#[cfg(test)]
#[path = "../tests/rust/test_style.rs"]
mod tests;
