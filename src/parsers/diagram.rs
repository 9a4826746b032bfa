//! Syntactic checks and whitespace cleanup for generated Mermaid flowcharts.
//!
//! Only the shape of the text is checked: a `graph`/`flowchart` header with a
//! direction, at least one bracketed node, and at least one connector between
//! two identifiers. Whether edges point at declared nodes is not checked.

use once_cell::sync::Lazy;
use regex::Regex;

static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)```")
        .expect("FENCED_BLOCK is a valid regex pattern")
});

static OPENING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^```[A-Za-z0-9_-]*[ \t]*").expect("OPENING_FENCE is a valid regex pattern")
});

static GRAPH_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:graph|flowchart)[ \t]+(?:TB|TD|BT|LR|RL)\b")
        .expect("GRAPH_DECLARATION is a valid regex pattern")
});

static NODE_DEFINITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9_]+(?:\[[^\]\n]*\]|\([^)\n]*\)|\{[^}\n]*\})")
        .expect("NODE_DEFINITION is a valid regex pattern")
});

static CONNECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[A-Za-z0-9_]+(?:\[[^\]\n]*\]|\([^)\n]*\)|\{[^}\n]*\})?[ \t]*[-=.]{2,}>?[ \t]*(?:\|[^|\n]*\|[ \t]*)?[A-Za-z0-9_]+",
    )
    .expect("CONNECTION is a valid regex pattern")
});

static QUOTED_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""[^"\n]*""#).expect("QUOTED_SPAN is a valid regex pattern"));

/// Statements that never declare nodes or edges.
const NON_STRUCTURAL_PREFIXES: [&str; 5] = ["click ", "%%", "style ", "classDef ", "linkStyle "];

static SPACE_AFTER_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\[({])[ \t]+").expect("SPACE_AFTER_OPEN is a valid regex pattern"));

static SPACE_BEFORE_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+([\])}])").expect("SPACE_BEFORE_CLOSE is a valid regex pattern"));

/// The first structural element a diagram was found to be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramDefect {
    MissingGraph,
    MissingNodes,
    MissingConnections,
}

impl DiagramDefect {
    /// Short label naming the missing element.
    pub fn label(&self) -> &'static str {
        match self {
            DiagramDefect::MissingGraph => "graph",
            DiagramDefect::MissingNodes => "nodes",
            DiagramDefect::MissingConnections => "connections",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DiagramDefect::MissingGraph => {
                "a `graph` declaration with a direction (TD, TB, BT, LR or RL)"
            }
            DiagramDefect::MissingNodes => "node definitions with bracketed labels such as A[Label]",
            DiagramDefect::MissingConnections => "connections between nodes such as A --> B",
        }
    }
}

impl std::fmt::Display for DiagramDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the body of the first fenced code block, or the text with any
/// unterminated leading/trailing fence removed.
pub fn strip_code_fence(raw: &str) -> &str {
    let text = raw.trim();

    if let Some(body) = FENCED_BLOCK.captures(text).and_then(|caps| caps.get(1)) {
        return body.as_str().trim();
    }

    let text = match OPENING_FENCE.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    };
    text.trim_end_matches("```").trim()
}

/// The lines that can hold node and edge statements, with quoted strings
/// emptied so URLs and tooltips cannot pass for brackets or connectors.
fn structural_text(body: &str) -> String {
    body.lines()
        .map(str::trim)
        .filter(|line| !NON_STRUCTURAL_PREFIXES.iter().any(|p| line.starts_with(p)))
        .map(|line| QUOTED_SPAN.replace_all(line, "\"\"").into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapses whitespace runs inside each line, drops blank lines and removes
/// padding just inside brackets.
///
/// Unlike a full whitespace collapse, line breaks survive: Mermaid reads them
/// as statement separators, so joining lines would change the diagram.
pub fn normalize_diagram(text: &str) -> String {
    let collapsed = text
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let opened = SPACE_AFTER_OPEN.replace_all(&collapsed, "$1");
    SPACE_BEFORE_CLOSE.replace_all(&opened, "$1").into_owned()
}

/// Checks the structural requirements in order and returns the cleaned diagram.
pub fn clean_diagram(raw: &str) -> Result<String, DiagramDefect> {
    let body = strip_code_fence(raw);

    if !GRAPH_DECLARATION.is_match(body) {
        return Err(DiagramDefect::MissingGraph);
    }
    let statements = structural_text(body);
    if !NODE_DEFINITION.is_match(&statements) {
        return Err(DiagramDefect::MissingNodes);
    }
    if !CONNECTION.is_match(&statements) {
        return Err(DiagramDefect::MissingConnections);
    }

    Ok(normalize_diagram(body))
}
