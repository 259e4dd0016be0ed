//! Bidirectional conversion between the UI graph and the canonical
//! [`GraphSpec`], plus JSON import/export of whole documents.
//!
//! The transformer owns no long-lived state; it is a pure mapping layer over
//! an injected [`NodeTypeRegistry`]. Canonical specs are produced on demand
//! for export and execution, and every imported spec is validated before any
//! UI state is built from it.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ImportError};
use crate::graph::{EdgeSpec, GraphSpec, NodeSpec, PositionMap, UiEdge, UiNode};
use crate::layout;
use crate::schema::NodeTypeRegistry;
use crate::validator::validate_graph_spec;

/// Format tag written into exported bundles.
pub const FORMAT_VERSION: &str = "1.0.0";

/// The result of a successful backend-to-UI conversion. Warnings are
/// advisory findings (disconnected nodes) that did not block the conversion.
#[derive(Debug, Clone)]
pub struct ImportedGraph {
    pub nodes: Vec<UiNode>,
    pub edges: Vec<UiEdge>,
    pub warnings: Vec<String>,
}

/// Timestamps and format tag attached to an exported bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleMetadata {
    pub version: String,
    pub created: String,
    pub last_modified: String,
}

/// A persistable export: the canonical graph plus the position snapshot and
/// bundle metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendBundle {
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
    pub positions: PositionMap,
    pub metadata: BundleMetadata,
}

/// External import document: canonical graph sections plus optional saved
/// positions.
#[derive(Debug, Deserialize)]
struct ImportDocument {
    nodes: Vec<NodeSpec>,
    edges: Vec<EdgeSpec>,
    #[serde(default)]
    positions: Option<PositionMap>,
}

/// Pure mapping layer between UI and canonical graph representations.
pub struct GraphTransformer<'a> {
    registry: &'a NodeTypeRegistry,
}

impl<'a> GraphTransformer<'a> {
    pub fn new(registry: &'a NodeTypeRegistry) -> Self {
        Self { registry }
    }

    /// Maps the UI graph to the canonical backend spec. Node types are
    /// resolved through the registry (identity fallback) and schema defaults
    /// are merged in without overwriting explicit values. Parallel edges are
    /// not deduplicated.
    pub fn to_backend_format(&self, nodes: &[UiNode], edges: &[UiEdge]) -> GraphSpec {
        let backend_nodes = nodes.iter().map(|node| self.transform_node(node)).collect();
        let backend_edges = edges
            .iter()
            .map(|edge| EdgeSpec {
                from: edge.source.clone(),
                to: edge.target.clone(),
            })
            .collect();
        GraphSpec {
            nodes: backend_nodes,
            edges: backend_edges,
        }
    }

    /// Maps a canonical spec to the UI graph. The spec is validated first: a
    /// failing validation aborts the conversion with every accumulated error;
    /// warnings are carried through on the result. Positions come from the
    /// saved map when one is supplied, otherwise from automatic grid layout.
    pub fn from_backend_format(
        &self,
        spec: &GraphSpec,
        positions: Option<&PositionMap>,
    ) -> Result<ImportedGraph, ConversionError> {
        let report = validate_graph_spec(spec, self.registry);
        if !report.is_valid() {
            return Err(ConversionError::InvalidGraph {
                errors: report.errors,
            });
        }

        let mut nodes: Vec<UiNode> = spec
            .nodes
            .iter()
            .map(|node| self.transform_backend_node(node))
            .collect();
        let edges: Vec<UiEdge> = spec
            .edges
            .iter()
            .map(|edge| UiEdge::between(edge.from.clone(), edge.to.clone()))
            .collect();

        match positions {
            Some(saved) => layout::restore_positions(&mut nodes, saved),
            None => layout::assign_positions(&mut nodes, &edges),
        }

        Ok(ImportedGraph {
            nodes,
            edges,
            warnings: report.warnings,
        })
    }

    /// Produces the persistable export bundle: canonical graph, position
    /// snapshot, and wall-clock metadata recorded at call time.
    pub fn to_frontend_format(&self, nodes: &[UiNode], edges: &[UiEdge]) -> FrontendBundle {
        let spec = self.to_backend_format(nodes, edges);
        let positions = layout::preserve_positions(nodes);
        let now = Utc::now().to_rfc3339();
        FrontendBundle {
            nodes: spec.nodes,
            edges: spec.edges,
            positions,
            metadata: BundleMetadata {
                version: FORMAT_VERSION.to_string(),
                created: now.clone(),
                last_modified: now,
            },
        }
    }

    /// Accepts an external JSON document per the import contract: the
    /// document must carry both `nodes` and `edges` as arrays or it is
    /// rejected outright, before any per-element validation runs. A
    /// `positions` map, when present, is honored during placement.
    pub fn import_json(&self, json: &str) -> Result<ImportedGraph, ImportError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ImportError::JsonParse(e.to_string()))?;

        let has_sections = value.get("nodes").is_some_and(|v| v.is_array())
            && value.get("edges").is_some_and(|v| v.is_array());
        if !has_sections {
            return Err(ImportError::MissingSections);
        }

        let document: ImportDocument =
            serde_json::from_value(value).map_err(|e| ImportError::JsonParse(e.to_string()))?;

        let spec = GraphSpec {
            nodes: document.nodes,
            edges: document.edges,
        };
        Ok(self.from_backend_format(&spec, document.positions.as_ref())?)
    }

    fn transform_node(&self, node: &UiNode) -> NodeSpec {
        let backend_type = self.registry.to_backend_type(&node.node_type);
        let mut params = node.params.clone();
        if let Some(schema) = self.registry.lookup_backend(backend_type) {
            schema.apply_defaults(&mut params);
        }
        NodeSpec {
            id: node.id.clone(),
            node_type: backend_type.to_string(),
            params,
        }
    }

    fn transform_backend_node(&self, node: &NodeSpec) -> UiNode {
        let ui_type = self.registry.to_ui_type(&node.node_type);
        UiNode {
            id: node.id.clone(),
            node_type: ui_type.to_string(),
            label: self.registry.label(ui_type).to_string(),
            params: node.params.clone(),
            // Placement happens after conversion.
            position: None,
        }
    }
}

/// Serializes a canonical spec as pretty JSON for export or preview.
pub fn export_json(spec: &GraphSpec) -> Result<String, ConversionError> {
    serde_json::to_string_pretty(spec).map_err(|e| ConversionError::Serialize(e.to_string()))
}
