//! Batch compilation for explanation payloads.
//!
//! An explanation carries a `diagrams` array of
//! `{ "type", "description", "mermaid_code" }` objects next to many other
//! fields this module ignores.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::layout::types::CompiledDiagram;

#[derive(Debug, Clone, Deserialize)]
struct ExplainerPayload {
    #[serde(default)]
    diagrams: Vec<DiagramEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct DiagramEntry {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    mermaid_code: String,
}

/// One compiled diagram from an explanation, in payload order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub diagram: CompiledDiagram,
}

/// Compile every diagram in an explanation payload.
///
/// Fails only when the payload is not valid JSON of the expected shape.
/// Diagrams that compile to nothing are kept as empty entries.
pub fn compile_explainer_payload(json: &str, config: &LayoutConfig) -> Result<Vec<CompiledEntry>> {
    let payload: ExplainerPayload = serde_json::from_str(json)?;
    debug!(diagrams = payload.diagrams.len(), "compiling explainer payload");

    let entries = payload
        .diagrams
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let diagram = crate::compile_diagram_with_config(&entry.mermaid_code, config);
            if diagram.is_empty() {
                warn!(index, kind = %entry.kind, "diagram has no nodes");
            }
            CompiledEntry {
                kind: entry.kind,
                description: entry.description,
                diagram,
            }
        })
        .collect();
    Ok(entries)
}

#[cfg(test)]
#[path = "../tests/rust/test_explainer.rs"]
mod tests;
