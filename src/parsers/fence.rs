//! Pull the diagram body out of markdown code fences.
//!
//! Generated diagram text often arrives wrapped in a fenced block.

const DIAGRAM_PREFIXES: &[&str] = &["graph", "flowchart", "sequenceDiagram"];

/// Return the body of the first fenced block starting with `opener`.
fn fenced_body<'a>(text: &'a str, opener: &str) -> Option<&'a str> {
    let start = text.find(opener)? + opener.len();
    let rest = &text[start..];
    let body = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;
    let end = body.find("```")?;
    Some(body[..end].trim())
}

/// Extract the diagram source from possibly fenced text.
///
/// 1. A ```` ```mermaid ```` block wins.
/// 2. A bare ```` ``` ```` block is used if its body starts with a diagram keyword.
/// 3. Otherwise the whole text, trimmed.
pub fn extract_diagram_source(text: &str) -> &str {
    if let Some(body) = fenced_body(text, "```mermaid") {
        return body;
    }
    if let Some(body) = fenced_body(text, "```") {
        if DIAGRAM_PREFIXES.iter().any(|p| body.starts_with(p)) {
            return body;
        }
    }
    text.trim()
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_fence.rs"]
mod tests;
