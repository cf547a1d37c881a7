use thiserror::Error;

/// Peek or extract attempted on a frontier with no entries.
/// Never escapes the shortest-path queries, which drain the frontier under an
/// emptiness check; reaching the caller through [`GraphError`] indicates a bug.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("the priority frontier is empty")]
pub struct EmptyFrontierError;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum GraphError {
    #[error("unknown node: {0}")]
    UnknownNode(String),
    #[error("invalid weight {weight} on edge {a} - {b}")]
    InvalidWeight { a: String, b: String, weight: f64 },
    #[error("self-loop on node {0}")]
    SelfLoop(String),
    #[error("adjacency matrix must be {expected}x{expected}")]
    MatrixShape { expected: usize },
    #[error("asymmetric matrix weights between {a} and {b}")]
    AsymmetricWeight { a: String, b: String },
    #[error("origin and destination are both {0}")]
    SameOriginAndDestination(String),
    #[error("no path from {origin} to {destination}")]
    NoPathFound { origin: String, destination: String },
    #[error(transparent)]
    EmptyFrontier(#[from] EmptyFrontierError),
}
