//! Swarm Node Matrix
//!
//! A fixed, ordered catalog of weighted processing nodes, the entanglement
//! graph derived from it, and the swarm-wide coherence aggregate.
//!
//! # Structure
//!
//! Every node carries a categorical [`Layer`], a static weight and a mutable
//! coherence in `[0, 1]`. The matrix order is significant: it defines the
//! ring adjacency of the entanglement graph.
//!
//! The entanglement graph is built exactly once, when the matrix is
//! constructed, from two rules:
//! - **Ring**: each node links to its predecessor and successor in matrix order
//! - **Quantum clique**: every [`Layer::Quantum`] node links to every other
//!
//! # Coherence
//!
//! Swarm coherence is the derived-weight-normalized average of the per-node
//! coherence values:
//!
//! ```text
//! coherence = Σ(cᵢ × wᵢ × φ) / Σ(wᵢ × φ)
//! ```
//!
//! An empty (or zero-weight) matrix has coherence 0.
//!
//! # Example
//!
//! ```
//! use swarm_matrix::{catalog, NodeMatrix};
//!
//! let matrix = NodeMatrix::new(catalog::canonical()).unwrap();
//! assert_eq!(matrix.len(), 26);
//! assert!((matrix.swarm_coherence() - 1.0).abs() < 1e-9);
//! ```

pub mod catalog;
pub mod coherence;
pub mod entanglement;
mod error;
mod layer;
mod matrix;
mod node;

pub use coherence::swarm_coherence;
pub use entanglement::ring_neighbors;
pub use error::{MatrixError, Result};
pub use layer::Layer;
pub use matrix::NodeMatrix;
pub use node::{NodeId, NodeSnapshot, NodeSpec, SwarmNode};

/// The golden ratio, used throughout as the weighting base.
///
/// Sync and consensus results are only reproducible if this value matches
/// exactly.
pub const PHI: f64 = 1.618033988749895;

/// Coherence every node starts with.
pub const INITIAL_COHERENCE: f64 = 1.0;

/// Upper bound of per-node coherence.
pub const MAX_COHERENCE: f64 = 1.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phi_is_golden_ratio() {
        // φ² = φ + 1
        assert!((PHI * PHI - (PHI + 1.0)).abs() < 1e-12);
        assert!((PHI - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-15);
    }

    #[test]
    fn coherence_bounds() {
        assert_eq!(INITIAL_COHERENCE, MAX_COHERENCE);
    }
}
