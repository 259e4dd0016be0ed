use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::spec::ParamMap;

/// A free-form canvas coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Saved canvas positions, keyed by node id.
pub type PositionMap = AHashMap<String, Position>;

/// A canonical node extended with presentation state: a display label and an
/// optional canvas position. The label is derived, never part of identity.
#[derive(Debug, Clone)]
pub struct UiNode {
    pub id: String,
    pub node_type: String,
    pub label: String,
    pub params: ParamMap,
    pub position: Option<Position>,
}

/// A UI edge. Its id is derived deterministically from its endpoints.
#[derive(Debug, Clone)]
pub struct UiEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl UiEdge {
    /// Creates an edge between two node ids with the derived `"{source}-{target}"` id.
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{}-{}", source, target),
            source,
            target,
        }
    }
}
