use thiserror::Error;

/// Errors raised while accepting an external JSON document as a graph.
#[derive(Error, Debug, Clone)]
pub enum ImportError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParse(String),

    #[error("Import rejected: document must contain 'nodes' and 'edges' arrays")]
    MissingSections,

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Errors raised while converting between the canonical and UI graph forms.
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid graph specification: {}", errors.join(", "))]
    InvalidGraph { errors: Vec<String> },

    #[error("Failed to serialize graph: {0}")]
    Serialize(String),
}

/// Errors raised by structural edits on an editing session.
#[derive(Error, Debug, Clone)]
pub enum EditError {
    #[error("Node '{0}' does not exist in the session")]
    UnknownNode(String),

    #[error("Edge '{0}' already exists")]
    DuplicateEdge(String),
}

/// Errors surfaced by an execution backend.
///
/// `Unreachable` is a transport-level failure the user may retry;
/// `Rejected` carries whatever detail the backend provided.
#[derive(Error, Debug, Clone)]
pub enum BackendError {
    #[error("Unable to reach execution backend: {0}")]
    Unreachable(String),

    #[error(
        "Execution backend rejected the request (status {status}): {}",
        detail.as_deref().unwrap_or("no detail provided")
    )]
    Rejected { status: u16, detail: Option<String> },
}
