//! Line-oriented extractor for loosely written flowchart text.

use tracing::{debug, trace};

use crate::syntax::builder::GraphBuilder;
use crate::syntax::types::Graph;

use super::base::{
    EdgeMatch, LineKind, Parser, classify_line, extract_edge, extract_nodes_outside,
};

/// Extractor for flowchart/graph diagrams.
pub struct FlowchartParser;

impl Parser for FlowchartParser {
    fn parse(&self, src: &str) -> Graph {
        let mut builder = GraphBuilder::new();
        let mut header_seen = false;

        for (lineno, line) in src.lines().enumerate() {
            let statement = match classify_line(line) {
                LineKind::Blank | LineKind::Comment => continue,
                LineKind::Header(direction) => {
                    // The first header decides the direction.
                    if !header_seen {
                        header_seen = true;
                        if let Some(d) = direction {
                            builder.set_direction(d);
                        }
                    }
                    continue;
                }
                LineKind::Statement(s) => s,
            };

            let edge_match = extract_edge(statement);
            if edge_match.is_none() {
                trace!(line = lineno + 1, "no edge on line");
            }

            // Markers inside an edge label are label text, not nodes.
            let label_span = edge_match.as_ref().and_then(|m| m.label_span.as_ref());
            for node in extract_nodes_outside(statement, label_span) {
                builder.add_node(node);
            }

            if let Some(EdgeMatch { pattern, edge, .. }) = edge_match {
                trace!(line = lineno + 1, ?pattern, source = %edge.source, target = %edge.target, "edge");
                builder.add_edge(edge);
            }
        }

        debug!(
            nodes = builder.node_count(),
            edges = builder.edge_count(),
            "extracted declarations"
        );
        builder.finish()
    }
}
