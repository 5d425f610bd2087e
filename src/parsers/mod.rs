//! Parser entry point — fence stripping, then line extraction.

pub mod base;
pub mod fence;
pub mod flowchart;

pub use base::{EdgePattern, Parser};
pub use fence::extract_diagram_source;

use crate::syntax::types::Graph;
use flowchart::FlowchartParser;

/// Parse diagram text into a `Graph`.
///
/// Never fails; input without any recognizable declaration yields an
/// empty graph.
pub fn parse(src: &str) -> Graph {
    FlowchartParser.parse(extract_diagram_source(src))
}
