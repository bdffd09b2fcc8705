//! Line notations used to write transition diagrams in doc comments.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

const ARROW: &str = "-->";
const LABEL_SEPARATOR: char = ':';

/// One `source --> destination: label` line of a diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edge {
    pub src: String,
    pub dst: String,
    pub label: Option<String>,
}

impl Edge {
    /// An edge with neither endpoint, as produced by placeholder notations.
    pub fn is_empty(&self) -> bool {
        self.src.is_empty() && self.dst.is_empty()
    }
}

/// Decodes a single diagram line into an [`Edge`].
pub trait LineParser {
    fn parse_line(&self, line: &str) -> Result<Edge, ParseError>;
}

/// Mermaid state diagram arrows: `Still --> Moving: Move`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MermaidParser;

impl LineParser for MermaidParser {
    fn parse_line(&self, line: &str) -> Result<Edge, ParseError> {
        let body = strip_comment_leader(line);
        let invalid = || ParseError::InvalidLine {
            line: line.to_string(),
        };

        let mut parts = body.split(LABEL_SEPARATOR);
        let transition = parts.next().unwrap_or_default();
        let label = parts.next().map(str::trim).filter(|l| !l.is_empty());
        if parts.next().is_some() {
            return Err(invalid());
        }

        let (src, dst) = transition.split_once(ARROW).ok_or_else(invalid)?;
        let (src, dst) = (src.trim(), dst.trim());
        if src.is_empty() || dst.is_empty() || dst.contains(ARROW) {
            return Err(invalid());
        }

        Ok(Edge {
            src: src.to_string(),
            dst: dst.to_string(),
            label: label.map(str::to_string),
        })
    }
}

/// Placeholder for Graphviz edges. Accepts every line and yields an empty edge.
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphvizParser;

impl LineParser for GraphvizParser {
    fn parse_line(&self, _line: &str) -> Result<Edge, ParseError> {
        Ok(Edge::default())
    }
}

/// Notation a diagram is written in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DocType {
    #[default]
    Mermaid,
    Graphviz,
}

impl DocType {
    /// Builds the parser for this notation.
    pub fn line_parser(self) -> Box<dyn LineParser> {
        match self {
            Self::Mermaid => Box::new(MermaidParser),
            Self::Graphviz => Box::new(GraphvizParser),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mermaid => "mermaid",
            Self::Graphviz => "graphviz",
        }
    }
}

impl FromStr for DocType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mermaid" => Ok(Self::Mermaid),
            "graphviz" => Ok(Self::Graphviz),
            other => Err(ParseError::UnknownDocType(other.to_string())),
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs `parser` over every doc line, skipping blank lines and empty edges.
///
/// The first line the parser rejects aborts the whole extraction.
pub fn extract_edges<S: AsRef<str>>(
    lines: &[S],
    parser: &dyn LineParser,
) -> Result<Vec<Edge>, ParseError> {
    let mut edges = Vec::with_capacity(lines.len());
    for line in lines {
        let line = line.as_ref();
        if strip_comment_leader(line).trim().is_empty() {
            continue;
        }

        let edge = parser.parse_line(line)?;
        if edge.is_empty() {
            continue;
        }
        edges.push(edge);
    }

    tracing::debug!(count = edges.len(), "extracted diagram edges");
    Ok(edges)
}

fn strip_comment_leader(line: &str) -> &str {
    let trimmed = line.trim_start();
    ["///", "//!", "//"]
        .iter()
        .find_map(|leader| trimmed.strip_prefix(leader))
        .unwrap_or(line)
}
