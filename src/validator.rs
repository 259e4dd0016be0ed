//! Structural and semantic validation over a canonical [`GraphSpec`].
//!
//! Validation accumulates every finding in one pass so a single call surfaces
//! every problem: per-node schema checks, per-edge reference checks, cycle
//! detection, and disconnected-node advisories. Errors block execution and
//! import; warnings never do.

use ahash::{AHashMap, AHashSet};
use itertools::Itertools;

use crate::graph::{EdgeSpec, GraphSpec, NodeSpec};
use crate::schema::NodeTypeRegistry;

/// The accumulated outcome of one validation pass.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// A graph is valid iff no errors were recorded. Warnings never count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Runs every structural and semantic check against the graph, never
/// short-circuiting between checks.
pub fn validate_graph_spec(spec: &GraphSpec, registry: &NodeTypeRegistry) -> ValidationReport {
    let mut report = ValidationReport::default();

    let mut seen_ids: AHashSet<&str> = AHashSet::new();
    for (index, node) in spec.nodes.iter().enumerate() {
        validate_node(node, index, registry, &mut report.errors);
        if !node.id.is_empty() && !seen_ids.insert(node.id.as_str()) {
            report
                .errors
                .push(format!("Node {}: Duplicate id '{}'", index, node.id));
        }
    }

    for (index, edge) in spec.edges.iter().enumerate() {
        validate_edge(edge, index, &spec.nodes, &mut report.errors);
    }

    if has_cycle(spec) {
        report
            .errors
            .push("Graph contains cycles which may cause infinite execution".to_string());
    }

    let disconnected = find_disconnected_nodes(spec);
    if !disconnected.is_empty() {
        report.warnings.push(format!(
            "Disconnected nodes found: {}",
            disconnected.iter().join(", ")
        ));
    }

    report
}

fn validate_node(
    node: &NodeSpec,
    index: usize,
    registry: &NodeTypeRegistry,
    errors: &mut Vec<String>,
) {
    if node.id.is_empty() {
        errors.push(format!("Node {}: Missing id", index));
    }
    if node.node_type.is_empty() {
        errors.push(format!("Node {}: Missing type", index));
        return;
    }

    let Some(schema) = registry.lookup_backend(&node.node_type) else {
        errors.push(format!(
            "Node {}: Invalid type '{}'. Valid types: {}",
            index,
            node.node_type,
            registry.known_backend_types().iter().join(", ")
        ));
        return;
    };
    for param in &schema.parameters {
        match node.params.get(&param.name) {
            None => {
                if param.required {
                    errors.push(format!(
                        "Node {}: Missing required parameter '{}'",
                        index, param.name
                    ));
                }
            }
            Some(value) => {
                if !param.kind.matches(value) {
                    errors.push(format!(
                        "Node {}: Parameter '{}' must be a {}",
                        index, param.name, param.kind
                    ));
                }
            }
        }
    }
}

fn validate_edge(edge: &EdgeSpec, index: usize, nodes: &[NodeSpec], errors: &mut Vec<String>) {
    if edge.from.is_empty() {
        errors.push(format!("Edge {}: Missing from_ field", index));
    } else if !nodes.iter().any(|n| n.id == edge.from) {
        errors.push(format!(
            "Edge {}: Source node '{}' does not exist",
            index, edge.from
        ));
    }
    if edge.to.is_empty() {
        errors.push(format!("Edge {}: Missing to field", index));
    } else if !nodes.iter().any(|n| n.id == edge.to) {
        errors.push(format!(
            "Edge {}: Target node '{}' does not exist",
            index, edge.to
        ));
    }
}

/// Depth-first cycle search with an explicit stack, a visited set, and an
/// on-stack set. Reaching a vertex currently on the traversal stack means the
/// graph has a cycle; one is enough, cycles are never enumerated.
fn has_cycle(spec: &GraphSpec) -> bool {
    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in &spec.edges {
        adjacency
            .entry(edge.from.as_str())
            .or_default()
            .push(edge.to.as_str());
    }

    enum Step<'a> {
        Enter(&'a str),
        Leave(&'a str),
    }

    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut on_stack: AHashSet<&str> = AHashSet::new();

    for node in &spec.nodes {
        if visited.contains(node.id.as_str()) {
            continue;
        }
        let mut stack = vec![Step::Enter(node.id.as_str())];
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(id) => {
                    if !visited.insert(id) {
                        continue;
                    }
                    on_stack.insert(id);
                    stack.push(Step::Leave(id));
                    if let Some(successors) = adjacency.get(id) {
                        for &next in successors {
                            if on_stack.contains(next) {
                                return true;
                            }
                            if !visited.contains(next) {
                                stack.push(Step::Enter(next));
                            }
                        }
                    }
                }
                Step::Leave(id) => {
                    on_stack.remove(id);
                }
            }
        }
    }
    false
}

/// A node is disconnected iff its id never appears as either edge endpoint.
/// Ids are returned in node insertion order.
fn find_disconnected_nodes(spec: &GraphSpec) -> Vec<&str> {
    let mut connected: AHashSet<&str> = AHashSet::new();
    for edge in &spec.edges {
        connected.insert(edge.from.as_str());
        connected.insert(edge.to.as_str());
    }
    spec.nodes
        .iter()
        .map(|node| node.id.as_str())
        .filter(|id| !connected.contains(id))
        .collect()
}
