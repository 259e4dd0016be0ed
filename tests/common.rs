//! Common test utilities for building graph specs and sessions.
use assetgraph::prelude::*;

/// Builds a `NodeSpec` from literal JSON params.
#[allow(dead_code)]
pub fn node(id: &str, node_type: &str, params: serde_json::Value) -> NodeSpec {
    NodeSpec {
        id: id.to_string(),
        node_type: node_type.to_string(),
        params: params.as_object().cloned().unwrap_or_default(),
    }
}

#[allow(dead_code)]
pub fn edge(from: &str, to: &str) -> EdgeSpec {
    EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
    }
}

/// A ticker loader feeding an RSI transform with empty params.
///
/// Valid, fully connected, and `b` gains `{period: 14, column: "close"}`
/// after defaulting.
#[allow(dead_code)]
pub fn simple_spec() -> GraphSpec {
    GraphSpec {
        nodes: vec![
            node("a", "LoadTickerData", serde_json::json!({"ticker": "AAPL"})),
            node("b", "CalculateRSI", serde_json::json!({})),
        ],
        edges: vec![edge("a", "b")],
    }
}

/// Two parameterless nodes forming a directed two-cycle.
#[allow(dead_code)]
pub fn cyclic_spec() -> GraphSpec {
    GraphSpec {
        nodes: vec![
            node("x", "PreprocessFinancials", serde_json::json!({})),
            node("y", "SummarizeIncomeStatement", serde_json::json!({})),
        ],
        edges: vec![edge("x", "y"), edge("y", "x")],
    }
}

/// A linear three-stage pipeline plus one node with no incident edge.
#[allow(dead_code)]
pub fn spec_with_disconnected_node() -> GraphSpec {
    GraphSpec {
        nodes: vec![
            node("load", "LoadIncomeStatement", serde_json::json!({})),
            node("prep", "PreprocessFinancials", serde_json::json!({})),
            node("report", "GenerateLLMReport", serde_json::json!({})),
            node("orphan", "LoadCashFlow", serde_json::json!({})),
        ],
        edges: vec![edge("load", "prep"), edge("prep", "report")],
    }
}

/// UI-side rendition of `simple_spec`, with explicit positions.
#[allow(dead_code)]
pub fn simple_ui_graph() -> (Vec<UiNode>, Vec<UiEdge>) {
    let nodes = vec![
        UiNode {
            id: "a".to_string(),
            node_type: "LoadTickerData".to_string(),
            label: "Load Ticker Data".to_string(),
            params: serde_json::json!({"ticker": "AAPL"})
                .as_object()
                .cloned()
                .unwrap_or_default(),
            position: Some(Position::new(10.0, 20.0)),
        },
        UiNode {
            id: "b".to_string(),
            node_type: "CalculateRSI".to_string(),
            label: "Calculate RSI".to_string(),
            params: ParamMap::new(),
            position: Some(Position::new(260.0, 20.0)),
        },
    ];
    let edges = vec![UiEdge::between("a", "b")];
    (nodes, edges)
}
