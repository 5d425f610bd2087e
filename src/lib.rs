//! flowlayout — loose flowchart text to a positioned node/edge graph.
//!
//! Public API: `compile_diagram()`
//!
//! Pipeline: fence stripping → line extraction → graph builder (dedup +
//! fallback path) → BFS levels → centered coordinates → palette colors.

pub mod config;
pub mod error;
pub mod explainer;
pub mod layout;
pub mod parsers;
pub mod style;
pub mod syntax;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::config::LayoutConfig;
pub use crate::error::{Error, Result};
pub use crate::layout::types::{CompiledDiagram, Point, PositionedNode};
pub use crate::syntax::types::{Direction, EdgeDecl, NodeDecl, NodeShape};

use tracing::debug;

use crate::layout::full_layout;
use crate::parsers::parse;

/// Compile diagram text with the default layout configuration.
///
/// Never fails. Input with no recognizable node yields an empty diagram,
/// and any edges it declared are dropped too.
pub fn compile_diagram(src: &str) -> CompiledDiagram {
    compile_diagram_with_config(src, &LayoutConfig::new())
}

/// Compile diagram text with a custom layout configuration.
pub fn compile_diagram_with_config(src: &str, config: &LayoutConfig) -> CompiledDiagram {
    let graph = parse(src);
    if graph.is_empty() {
        // Edges without any declared node have nothing to attach to.
        debug!(edges = graph.edges.len(), "no nodes; nothing to lay out");
        return CompiledDiagram {
            direction: config.direction_override.unwrap_or(graph.direction),
            ..CompiledDiagram::default()
        };
    }
    full_layout(&graph, config)
}
