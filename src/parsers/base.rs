//! Parser trait, line classification and the per-line pattern matchers.
//!
//! Node declarations come from two shape matchers; edges come from an
//! ordered list of `EdgePattern`s where the first match wins.

use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::syntax::types::{Direction, EdgeDecl, Graph, NodeDecl, NodeShape};

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for diagram parsers.
///
/// Parsing never fails: unrecognized input yields an empty or partial graph.
pub trait Parser {
    fn parse(&self, src: &str) -> Graph;
}

// ─── Pattern fragments ───────────────────────────────────────────────────────

/// Node identifier.
const ID: &str = r"(\w+)";
/// Either shape marker, non-capturing: `[label]` or `{{label}}`.
const SHAPE: &str = r"(?:\[[^\]\n]*\]|\{\{[^}\n]*\}\})";
/// Arrow connector: `-->`, `--->`, `==>`, `-.->`.
const ARROW: &str = r"(?:-{2,}>|={2,}>|-\.+->)";
/// Optional `|label|` directly after an arrow.
const PIPE_LABEL: &str = r"(?:\|([^|\n]*)\|\s*)?";

const HEADER_KEYWORDS: &[&str] = &["flowchart", "graph"];

fn compiled(cell: &'static OnceLock<Regex>, build: impl FnOnce() -> String) -> &'static Regex {
    cell.get_or_init(|| Regex::new(&build()).expect("built-in pattern compiles"))
}

fn decision_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, || format!(r"{ID}\{{\{{([^}}\n]*)\}}\}}"))
}

fn process_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compiled(&RE, || format!(r"{ID}\[([^\]\n]*)\]"))
}

// ─── Line classification ─────────────────────────────────────────────────────

/// What a single source line is, before any pattern is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// `%% ...`
    Comment,
    /// `flowchart TD`, `graph LR`, ... with the direction token if present.
    Header(Option<Direction>),
    Statement(&'a str),
}

pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with("%%") {
        return LineKind::Comment;
    }
    let mut words = trimmed.split(|c: char| c.is_whitespace() || c == ';');
    let first = words.next().unwrap_or_default();
    if HEADER_KEYWORDS
        .iter()
        .any(|kw| first.eq_ignore_ascii_case(kw))
    {
        let direction = words
            .find(|w| !w.is_empty())
            .and_then(Direction::from_keyword);
        return LineKind::Header(direction);
    }
    LineKind::Statement(trimmed)
}

// ─── Node extraction ─────────────────────────────────────────────────────────

fn node_from(caps: &Captures<'_>, shape: NodeShape) -> NodeDecl {
    let id = &caps[1];
    let label = caps[2].trim();
    let label = if label.is_empty() { id } else { label };
    NodeDecl::new(id, label, shape)
}

fn contains(outer: &Range<usize>, inner: &Range<usize>) -> bool {
    outer.start <= inner.start && inner.end <= outer.end
}

fn enclosed_by(others: &[(Range<usize>, NodeDecl)], span: &Range<usize>) -> bool {
    others.iter().any(|(outer, _)| contains(outer, span))
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Extract every node declaration on a line, in the order they appear.
pub fn extract_nodes(line: &str) -> Vec<NodeDecl> {
    extract_nodes_outside(line, None)
}

/// Extract node declarations, ignoring any marker that touches `skip`
/// (the span of an edge label).
///
/// When one marker sits inside the other's label (`A[see C{{x}}]`,
/// `C{{check x[0]}}`), only the enclosing declaration is a node.
pub fn extract_nodes_outside(line: &str, skip: Option<&Range<usize>>) -> Vec<NodeDecl> {
    let decisions: Vec<(Range<usize>, NodeDecl)> = decision_re()
        .captures_iter(line)
        .filter_map(|caps| Some((caps.get(0)?.range(), node_from(&caps, NodeShape::Decision))))
        .collect();
    let processes: Vec<(Range<usize>, NodeDecl)> = process_re()
        .captures_iter(line)
        .filter_map(|caps| Some((caps.get(0)?.range(), node_from(&caps, NodeShape::Rectangle))))
        .collect();

    let mut found: Vec<(Range<usize>, NodeDecl)> = Vec::new();
    for (span, node) in &decisions {
        if !enclosed_by(&processes, span) {
            found.push((span.clone(), node.clone()));
        }
    }
    for (span, node) in &processes {
        if !enclosed_by(&decisions, span) {
            found.push((span.clone(), node.clone()));
        }
    }
    if let Some(skip) = skip {
        found.retain(|(span, _)| !overlaps(span, skip));
    }

    found.sort_by_key(|(span, _)| span.start);
    found.into_iter().map(|(_, node)| node).collect()
}

// ─── Edge patterns ───────────────────────────────────────────────────────────

/// Edge matchers, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePattern {
    /// `A[..] -- text --> B[..]` or `A[..] -->|text| B[..]`
    LabeledBracketed,
    /// `A[..] --> B[..]`
    Bracketed,
    /// `A --> B[..]`, optionally `A -->|text| B[..]`
    BareSource,
    /// `A --> B`, optionally `A -->|text| B`
    BareBoth,
}

impl EdgePattern {
    /// Priority order used by `extract_edge`.
    pub const ALL: [EdgePattern; 4] = [
        EdgePattern::LabeledBracketed,
        EdgePattern::Bracketed,
        EdgePattern::BareSource,
        EdgePattern::BareBoth,
    ];

    fn regex(self) -> &'static Regex {
        static LABELED: OnceLock<Regex> = OnceLock::new();
        static BRACKETED: OnceLock<Regex> = OnceLock::new();
        static BARE_SOURCE: OnceLock<Regex> = OnceLock::new();
        static BARE_BOTH: OnceLock<Regex> = OnceLock::new();
        match self {
            // groups: 1 source, 2 dash label, 3 pipe label, 4 target
            EdgePattern::LabeledBracketed => compiled(&LABELED, || {
                format!(
                    r"^\s*{ID}{SHAPE}\s*(?:(?:--|==)\s*([^\s>|\-=][^>|\n]*?)\s*{ARROW}|{ARROW}\s*\|([^|\n]*)\|)\s*{ID}{SHAPE}"
                )
            }),
            // groups: 1 source, 2 target
            EdgePattern::Bracketed => compiled(&BRACKETED, || {
                format!(r"^\s*{ID}{SHAPE}\s*{ARROW}\s*{ID}{SHAPE}")
            }),
            // groups: 1 source, 2 pipe label, 3 target
            EdgePattern::BareSource => compiled(&BARE_SOURCE, || {
                format!(r"^\s*{ID}\s*{ARROW}\s*{PIPE_LABEL}{ID}{SHAPE}")
            }),
            EdgePattern::BareBoth => compiled(&BARE_BOTH, || {
                format!(r"^\s*{ID}\s*{ARROW}\s*{PIPE_LABEL}{ID}")
            }),
        }
    }

    /// Try this single pattern against a line.
    pub fn match_line(self, line: &str) -> Option<EdgeMatch> {
        let caps = self.regex().captures(line)?;
        let text = |i: usize| caps.get(i).map(|m| m.as_str());
        let (source, label_group, target) = match self {
            EdgePattern::LabeledBracketed => {
                let label = if caps.get(2).is_some() { 2 } else { 3 };
                (text(1)?, Some(label), text(4)?)
            }
            EdgePattern::Bracketed => (text(1)?, None, text(2)?),
            EdgePattern::BareSource | EdgePattern::BareBoth => (text(1)?, Some(2), text(3)?),
        };
        let label = label_group.and_then(|i| caps.get(i));
        let label_span = label.map(|m| m.range());
        let edge = match label.map(|m| m.as_str().trim()).filter(|l| !l.is_empty()) {
            Some(l) => EdgeDecl::labeled(source, target, l),
            None => EdgeDecl::new(source, target),
        };
        Some(EdgeMatch {
            pattern: self,
            edge,
            label_span,
        })
    }

    /// The edge this single pattern recognizes on a line, if any.
    pub fn try_match(self, line: &str) -> Option<EdgeDecl> {
        self.match_line(line).map(|m| m.edge)
    }
}

/// An edge recognized on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMatch {
    pub pattern: EdgePattern,
    pub edge: EdgeDecl,
    /// Byte range of the inline label text within the line.
    pub label_span: Option<Range<usize>>,
}

/// Extract at most one edge from a line: the first pattern that matches.
pub fn extract_edge(line: &str) -> Option<EdgeMatch> {
    EdgePattern::ALL
        .iter()
        .find_map(|&pattern| pattern.match_line(line))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_base.rs"]
mod tests;
