use serde::Serialize;

/// Font rendering hint attached to every node.
///
/// The rendering engine interprets `multi: "html"` as permission to parse
/// the `<b>` markup embedded in node labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontHint {
    pub multi: &'static str,
}

impl Default for FontHint {
    fn default() -> Self {
        Self { multi: "html" }
    }
}

/// One render-ready node, one per (package, version) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: u64,
    pub label: String,
    pub color: String,
    pub font: FontHint,
}

/// One reverse-dependency edge. Cycles are legal: real dependency graphs
/// contain them, and nothing here assumes acyclicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: u64,
    pub to: u64,
}

/// The node/edge pair consumed by the force-directed rendering engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphData {
    /// Pure conversion from the raw lists into an independent render-ready
    /// instance. No validation, no mutation of the inputs; calling this
    /// twice on the same lists yields two structurally equal outputs.
    pub fn materialize(nodes: &[Node], edges: &[Edge]) -> Self {
        Self {
            nodes: nodes.to_vec(),
            edges: edges.to_vec(),
        }
    }
}
