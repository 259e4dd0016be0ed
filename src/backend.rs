//! The execution-backend contract.
//!
//! This core never executes graphs; it only prepares canonical requests and
//! models the response/error shapes of the backend. Transport (HTTP,
//! timeouts, retries) lives behind the [`ExecutionBackend`] seam.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{BackendError, ConversionError};
use crate::graph::GraphSpec;
use crate::schema::NodeTypeRegistry;
use crate::validator::validate_graph_spec;

/// Per-node execution outcome reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeOutcome {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Execution results keyed by node id.
pub type ExecutionReport = AHashMap<String, NodeOutcome>;

/// The seam to an execution backend. Implementations own their transport and
/// must map transport failures to [`BackendError::Unreachable`] and
/// non-success responses to [`BackendError::Rejected`].
pub trait ExecutionBackend {
    fn submit(&self, spec: &GraphSpec) -> Result<ExecutionReport, BackendError>;
}

/// Pre-flight validates a spec and serializes the canonical wire body.
/// Refuses to produce a request for an invalid graph, surfacing every
/// accumulated error.
pub fn prepare_submission(
    spec: &GraphSpec,
    registry: &NodeTypeRegistry,
) -> Result<String, ConversionError> {
    let report = validate_graph_spec(spec, registry);
    if !report.is_valid() {
        return Err(ConversionError::InvalidGraph {
            errors: report.errors,
        });
    }
    serde_json::to_string(spec).map_err(|e| ConversionError::Serialize(e.to_string()))
}
