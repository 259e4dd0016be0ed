use serde::{Deserialize, Serialize};

/// Parameter values carried by a node, keyed by parameter name.
pub type ParamMap = serde_json::Map<String, serde_json::Value>;

/// A single processing step in the canonical graph.
///
/// `node_type` is a key into the [`NodeTypeRegistry`](crate::schema::NodeTypeRegistry);
/// `params` holds the per-node configuration values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub params: ParamMap,
}

/// A directed connection between two nodes in the canonical graph.
///
/// The wire field is `from_` (trailing underscore) because `from` collides
/// with a reserved identifier in a downstream consumer. Input accepts either
/// spelling; output always emits `from_`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeSpec {
    #[serde(rename = "from_", alias = "from")]
    pub from: String,
    pub to: String,
}

/// The canonical, backend-facing graph: nodes plus directed edges, both in
/// insertion order. Free of any presentation metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSpec {
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
}

impl GraphSpec {
    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&NodeSpec> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
