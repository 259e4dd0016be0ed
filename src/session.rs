//! The editing session: the one mutable entity in the system.
//!
//! A session owns the UI graph (nodes, edges, positions) for a single active
//! editor. Canonical specs are derived from it on demand; a failed import or
//! validation never mutates the held graph.

use crate::error::{EditError, ImportError};
use crate::graph::{GraphSpec, ParamMap, Position, UiEdge, UiNode};
use crate::schema::NodeTypeRegistry;
use crate::transform::{FrontendBundle, GraphTransformer, export_json};
use crate::validator::{ValidationReport, validate_graph_spec};

pub struct EditorSession {
    registry: NodeTypeRegistry,
    nodes: Vec<UiNode>,
    edges: Vec<UiEdge>,
    next_id: u64,
}

impl EditorSession {
    pub fn new(registry: NodeTypeRegistry) -> Self {
        Self {
            registry,
            nodes: Vec::new(),
            edges: Vec::new(),
            next_id: 1,
        }
    }

    /// A session backed by the built-in node catalog.
    pub fn with_builtin_catalog() -> Self {
        Self::new(NodeTypeRegistry::builtin())
    }

    pub fn nodes(&self) -> &[UiNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[UiEdge] {
        &self.edges
    }

    pub fn registry(&self) -> &NodeTypeRegistry {
        &self.registry
    }

    /// Adds a node of the given type at a canvas position and returns its id.
    /// The label and initial parameters come from the registry; unregistered
    /// types degrade to an empty parameter set and the type name as label.
    pub fn add_node(&mut self, ui_type: &str, position: Position) -> String {
        let id = self.fresh_node_id();
        let mut params = ParamMap::new();
        if let Some(schema) = self.registry.lookup(ui_type) {
            schema.apply_defaults(&mut params);
        }
        self.nodes.push(UiNode {
            id: id.clone(),
            node_type: ui_type.to_string(),
            label: self.registry.label(ui_type).to_string(),
            params,
            position: Some(position),
        });
        id
    }

    /// Connects two existing nodes and returns the derived edge id.
    /// Reconnecting the same pair is rejected as a duplicate.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<String, EditError> {
        if !self.nodes.iter().any(|n| n.id == source) {
            return Err(EditError::UnknownNode(source.to_string()));
        }
        if !self.nodes.iter().any(|n| n.id == target) {
            return Err(EditError::UnknownNode(target.to_string()));
        }
        let edge = UiEdge::between(source, target);
        if self.edges.iter().any(|e| e.id == edge.id) {
            return Err(EditError::DuplicateEdge(edge.id));
        }
        let id = edge.id.clone();
        self.edges.push(edge);
        Ok(id)
    }

    /// Removes a node and every incident edge. Returns false when the id is
    /// unknown.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        if self.nodes.len() == before {
            return false;
        }
        self.edges.retain(|e| e.source != id && e.target != id);
        true
    }

    /// Moves a node. Returns false when the id is unknown.
    pub fn set_position(&mut self, id: &str, position: Position) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.position = Some(position);
                true
            }
            None => false,
        }
    }

    /// Derives the canonical spec for the current graph.
    pub fn export_spec(&self) -> GraphSpec {
        GraphTransformer::new(&self.registry).to_backend_format(&self.nodes, &self.edges)
    }

    /// Derives the persistable bundle (spec + positions + metadata).
    pub fn export_bundle(&self) -> FrontendBundle {
        GraphTransformer::new(&self.registry).to_frontend_format(&self.nodes, &self.edges)
    }

    /// Canonical spec as pretty JSON, for preview or clipboard export.
    pub fn export_json(&self) -> Result<String, crate::error::ConversionError> {
        export_json(&self.export_spec())
    }

    /// Pre-flight validation of the current graph.
    pub fn validate(&self) -> ValidationReport {
        validate_graph_spec(&self.export_spec(), &self.registry)
    }

    /// Replaces the session graph with an imported document. The swap happens
    /// only after the import fully succeeds; on any error the previous graph
    /// is left untouched. Returns the import warnings.
    pub fn import_json(&mut self, json: &str) -> Result<Vec<String>, ImportError> {
        let imported = GraphTransformer::new(&self.registry).import_json(json)?;
        self.nodes = imported.nodes;
        self.edges = imported.edges;
        Ok(imported.warnings)
    }

    fn fresh_node_id(&mut self) -> String {
        loop {
            let candidate = format!("node_{}", self.next_id);
            self.next_id += 1;
            if !self.nodes.iter().any(|n| n.id == candidate) {
                return candidate;
            }
        }
    }
}
