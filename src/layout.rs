//! Canvas placement for UI nodes: a deterministic grid for freshly imported
//! graphs, plus snapshot/restore of saved positions for round-trips.

use crate::graph::{Position, PositionMap, UiEdge, UiNode};

/// Horizontal distance between grid columns.
pub const HORIZONTAL_SPACING: f64 = 250.0;
/// Vertical distance between grid rows.
pub const VERTICAL_SPACING: f64 = 150.0;

/// Places nodes on a square-ish grid in input order: `ceil(sqrt(n))` columns
/// per row. Edges are accepted for interface symmetry only; grid placement
/// ignores topology, editors reposition manually.
pub fn assign_positions(nodes: &mut [UiNode], _edges: &[UiEdge]) {
    if nodes.is_empty() {
        return;
    }
    let per_row = (nodes.len() as f64).sqrt().ceil() as usize;
    for (index, node) in nodes.iter_mut().enumerate() {
        node.position = Some(Position::new(
            (index % per_row) as f64 * HORIZONTAL_SPACING,
            (index / per_row) as f64 * VERTICAL_SPACING,
        ));
    }
}

/// Snapshots current positions by node id. Unpositioned nodes snapshot at the
/// origin so a later restore is total.
pub fn preserve_positions(nodes: &[UiNode]) -> PositionMap {
    nodes
        .iter()
        .map(|node| (node.id.clone(), node.position.unwrap_or_default()))
        .collect()
}

/// Applies saved positions per node id, falling back to the origin for any
/// node missing an entry. Position values themselves are not validated.
pub fn restore_positions(nodes: &mut [UiNode], positions: &PositionMap) {
    for node in nodes.iter_mut() {
        node.position = Some(positions.get(&node.id).copied().unwrap_or_default());
    }
}
