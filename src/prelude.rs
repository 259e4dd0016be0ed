//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types so callers can bring the core API
//! into scope with a single `use assetgraph::prelude::*;`.

// Graph model
pub use crate::graph::{
    EdgeSpec, GraphSpec, NodeSpec, ParamMap, Position, PositionMap, UiEdge, UiNode,
};

// Schema registry
pub use crate::schema::{NodeTypeRegistry, NodeTypeSchema, ParamKind, ParameterSchema};

// Conversion and validation
pub use crate::transform::{FrontendBundle, GraphTransformer, ImportedGraph, export_json};
pub use crate::validator::{ValidationReport, validate_graph_spec};

// Editing session
pub use crate::session::EditorSession;

// Execution contract
pub use crate::backend::{ExecutionBackend, ExecutionReport, NodeOutcome, prepare_submission};

// Error types
pub use crate::error::{BackendError, ConversionError, EditError, ImportError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
