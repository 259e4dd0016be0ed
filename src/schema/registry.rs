use std::fmt;

use ahash::AHashMap;
use serde_json::Value;

use crate::graph::ParamMap;

/// The semantic type a parameter value must have at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
}

impl ParamKind {
    /// Checks whether a JSON value has the runtime kind this parameter declares.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ParamKind::String => value.is_string(),
            ParamKind::Number => value.is_number(),
            ParamKind::Boolean => value.is_boolean(),
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::String => write!(f, "string"),
            ParamKind::Number => write!(f, "number"),
            ParamKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// The declared contract for one node parameter.
#[derive(Debug, Clone)]
pub struct ParameterSchema {
    pub name: String,
    pub kind: ParamKind,
    pub required: bool,
    pub default: Option<Value>,
}

impl ParameterSchema {
    pub fn required(name: &str, kind: ParamKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: true,
            default: None,
        }
    }

    pub fn optional(name: &str, kind: ParamKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: false,
            default: None,
        }
    }

    pub fn with_default(name: &str, kind: ParamKind, default: Value) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: false,
            default: Some(default),
        }
    }
}

/// Everything known about one node type: its display label, its backend type
/// name, and its parameter contract. One entry per type; the label table and
/// the parameter-schema table of older designs are folded together here.
#[derive(Debug, Clone)]
pub struct NodeTypeSchema {
    pub label: String,
    pub backend_type: String,
    pub parameters: Vec<ParameterSchema>,
}

impl NodeTypeSchema {
    /// Inserts the declared default for every parameter absent from `params`.
    /// Explicit values are never overwritten, so applying twice is a no-op.
    pub fn apply_defaults(&self, params: &mut ParamMap) {
        for param in &self.parameters {
            if params.contains_key(&param.name) {
                continue;
            }
            if let Some(default) = &param.default {
                params.insert(param.name.clone(), default.clone());
            }
        }
    }
}

/// Immutable catalog of node types, keyed by the UI-facing type name, with a
/// secondary index by backend type name. Loaded once and injected wherever
/// type metadata is needed; no process-wide state.
#[derive(Debug, Clone, Default)]
pub struct NodeTypeRegistry {
    entries: AHashMap<String, NodeTypeSchema>,
    backend_index: AHashMap<String, String>,
}

impl NodeTypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the registry preloaded with the built-in financial node catalog.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        super::catalog::register_builtin_types(&mut registry);
        registry
    }

    /// Registers a node type under its UI-facing name.
    pub fn register(&mut self, ui_type: &str, schema: NodeTypeSchema) {
        self.backend_index
            .insert(schema.backend_type.clone(), ui_type.to_string());
        self.entries.insert(ui_type.to_string(), schema);
    }

    /// Looks up a type by its UI-facing name. Absence is not an error:
    /// callers treat it as "no defaults, no required-parameter checks".
    pub fn lookup(&self, ui_type: &str) -> Option<&NodeTypeSchema> {
        self.entries.get(ui_type)
    }

    /// Looks up a type by its backend name.
    pub fn lookup_backend(&self, backend_type: &str) -> Option<&NodeTypeSchema> {
        self.backend_index
            .get(backend_type)
            .and_then(|ui| self.entries.get(ui))
    }

    /// The display label for a UI type, falling back to the type name itself.
    pub fn label<'a>(&'a self, ui_type: &'a str) -> &'a str {
        self.entries
            .get(ui_type)
            .map(|schema| schema.label.as_str())
            .unwrap_or(ui_type)
    }

    /// Resolves a UI type name to its backend name (identity fallback).
    pub fn to_backend_type<'a>(&'a self, ui_type: &'a str) -> &'a str {
        self.entries
            .get(ui_type)
            .map(|schema| schema.backend_type.as_str())
            .unwrap_or(ui_type)
    }

    /// Resolves a backend type name to its UI name (identity fallback).
    pub fn to_ui_type<'a>(&'a self, backend_type: &'a str) -> &'a str {
        self.backend_index
            .get(backend_type)
            .map(String::as_str)
            .unwrap_or(backend_type)
    }

    /// All recognized backend type names, sorted for stable messages.
    pub fn known_backend_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.backend_index.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
