//! Error types for swarm-matrix.

use thiserror::Error;

/// Result type for swarm-matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Configuration and domain errors raised while building or updating a matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// No node specs were supplied.
    #[error("node matrix is empty")]
    Empty,

    /// Two specs share the same identity.
    #[error("duplicate node id {id:?} at position {position}")]
    DuplicateId { id: String, position: usize },

    /// Weights must be finite and non-negative.
    #[error("invalid weight {weight} for node {id:?}")]
    InvalidWeight { id: String, weight: f64 },

    /// Coherence values must be finite.
    #[error("invalid coherence {value} for node {id:?}")]
    InvalidCoherence { id: String, value: f64 },

    /// Lookup by an id that is not part of the matrix.
    #[error("unknown node {0:?}")]
    UnknownNode(String),
}
