//! Error types for swarm-consensus.

use thiserror::Error;

/// Result type for consensus operations.
pub type Result<T> = std::result::Result<T, ConsensusError>;

/// Malformed consensus input, rejected before aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsensusError {
    /// The proposal has an empty string representation.
    #[error("proposal is empty")]
    EmptyProposal,

    /// A score is NaN or infinite.
    #[error("score {value} at index {index} is not finite")]
    NonFiniteScore { index: usize, value: f64 },
}
