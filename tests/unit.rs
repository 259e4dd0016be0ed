//! Unit tests for core assetgraph types.
mod common;
use common::*;

use assetgraph::prelude::*;
use serde_json::json;

#[test]
fn param_kind_matches_runtime_kinds() {
    assert!(ParamKind::String.matches(&json!("close")));
    assert!(!ParamKind::String.matches(&json!(1)));
    assert!(ParamKind::Number.matches(&json!(14)));
    assert!(ParamKind::Number.matches(&json!(14.5)));
    assert!(!ParamKind::Number.matches(&json!(true)));
    assert!(ParamKind::Boolean.matches(&json!(false)));
    assert!(!ParamKind::Boolean.matches(&json!("true")));
}

#[test]
fn param_kind_display() {
    assert_eq!(ParamKind::String.to_string(), "string");
    assert_eq!(ParamKind::Number.to_string(), "number");
    assert_eq!(ParamKind::Boolean.to_string(), "boolean");
}

#[test]
fn ui_edge_id_is_derived_from_endpoints() {
    let edge = UiEdge::between("a", "b");
    assert_eq!(edge.id, "a-b");
    assert_eq!(edge.source, "a");
    assert_eq!(edge.target, "b");
}

#[test]
fn validation_report_validity_ignores_warnings() {
    let report = ValidationReport {
        errors: vec![],
        warnings: vec!["Disconnected nodes found: x".to_string()],
    };
    assert!(report.is_valid());

    let report = ValidationReport {
        errors: vec!["Node 0: Missing id".to_string()],
        warnings: vec![],
    };
    assert!(!report.is_valid());
}

#[test]
fn registry_resolves_labels_and_type_names() {
    let registry = NodeTypeRegistry::builtin();
    assert_eq!(registry.label("CalculateRSI"), "Calculate RSI");
    assert_eq!(registry.to_backend_type("CalculateRSI"), "CalculateRSI");
    assert_eq!(registry.to_ui_type("CalculateRSI"), "CalculateRSI");
    // Identity fallback for unregistered names.
    assert_eq!(registry.to_backend_type("Mystery"), "Mystery");
    assert_eq!(registry.to_ui_type("Mystery"), "Mystery");
}

#[test]
fn registry_lookup_fails_soft() {
    let registry = NodeTypeRegistry::builtin();
    assert!(registry.lookup("NotAThing").is_none());
    assert!(registry.lookup_backend("NotAThing").is_none());
}

#[test]
fn known_backend_types_are_sorted() {
    let registry = NodeTypeRegistry::builtin();
    let types = registry.known_backend_types();
    assert_eq!(types.len(), registry.len());
    let mut sorted = types.clone();
    sorted.sort_unstable();
    assert_eq!(types, sorted);
}

#[test]
fn divergent_backend_names_resolve_both_ways() {
    let mut registry = NodeTypeRegistry::new();
    registry.register(
        "FancyLoader",
        NodeTypeSchema {
            label: "Fancy Loader".to_string(),
            backend_type: "fancy_loader".to_string(),
            parameters: vec![],
        },
    );
    assert_eq!(registry.to_backend_type("FancyLoader"), "fancy_loader");
    assert_eq!(registry.to_ui_type("fancy_loader"), "FancyLoader");
    assert!(registry.lookup_backend("fancy_loader").is_some());
}

#[test]
fn invalid_graph_error_joins_all_messages() {
    let err = ConversionError::InvalidGraph {
        errors: vec!["Node 0: Missing id".to_string(), "Node 1: Missing type".to_string()],
    };
    let rendered = err.to_string();
    assert!(rendered.contains("Node 0: Missing id"));
    assert!(rendered.contains("Node 1: Missing type"));
    assert!(rendered.starts_with("Invalid graph specification:"));
}

#[test]
fn backend_error_distinguishes_unreachable_from_rejected() {
    let unreachable = BackendError::Unreachable("connection refused".to_string());
    assert!(unreachable.to_string().contains("Unable to reach"));

    let rejected = BackendError::Rejected {
        status: 400,
        detail: Some("unknown node type".to_string()),
    };
    let rendered = rejected.to_string();
    assert!(rendered.contains("400"));
    assert!(rendered.contains("unknown node type"));

    let bare = BackendError::Rejected {
        status: 500,
        detail: None,
    };
    assert!(bare.to_string().contains("no detail provided"));
}

#[test]
fn graph_spec_node_lookup() {
    let spec = simple_spec();
    assert!(spec.node("a").is_some());
    assert!(spec.node("missing").is_none());
}
