//! Error types for lineup ordering.

use thiserror::Error;

/// Main error type for lineup operations.
///
/// The reference ordering never fails. Every variant except
/// [`LineupError::SerializationError`] is produced by the opt-in validation
/// pass, before any traversal starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineupError {
    /// An edge carries an empty identifier.
    #[error("Edge {index} has an empty identifier")]
    EmptyIdentifier { index: usize },

    /// The input has more edges than the configured limit.
    #[error("Too many edges: got {count}, limit {limit}")]
    TooManyEdges { count: usize, limit: usize },

    /// The degree sequence rules out an Eulerian trail.
    #[error("No Eulerian trail exists: odd-degree nodes {odd_nodes:?}")]
    NotEulerian { odd_nodes: Vec<String> },

    /// Some edge-bearing nodes cannot be reached from the rest of the graph.
    #[error("Graph is disconnected: unreachable nodes {unreachable:?}")]
    Disconnected { unreachable: Vec<String> },

    /// The sentinel root has no edges, so traversal would stop immediately.
    #[error("Sentinel root '{sentinel}' is not connected to any edge")]
    SentinelDetached { sentinel: String },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl LineupError {
    /// Returns true if the error describes the shape of the graph rather than
    /// a malformed or oversized input.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            LineupError::NotEulerian { .. }
                | LineupError::Disconnected { .. }
                | LineupError::SentinelDetached { .. }
        )
    }
}

/// Convenience Result type for lineup operations.
pub type Result<T> = std::result::Result<T, LineupError>;

impl From<serde_json::Error> for LineupError {
    fn from(err: serde_json::Error) -> Self {
        LineupError::SerializationError(err.to_string())
    }
}
