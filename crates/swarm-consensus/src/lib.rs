//! Swarm Consensus
//!
//! Two independent, stateless algorithms over the node matrix's weights.
//!
//! # Quantum-Weighted Vote
//!
//! Every node derives a yes/no vote from a stable hash of the proposal and
//! its own id. Quantum-layer nodes vote with `weight × φ`, all others with
//! their plain weight:
//!
//! ```text
//! approved ⇔ Σ yes-weight > Σ no-weight
//! ```
//!
//! The inequality is strict, so a tie is never approved.
//!
//! # φ-Weighted Average
//!
//! Folds an ordered score sequence (typically analyzer output) into a single
//! quality signal with exponentially increasing weight on later entries:
//!
//! ```text
//! average = Σ(vᵢ × φⁱ) / Σ(φⁱ)
//! ```
//!
//! # Example
//!
//! ```
//! use swarm_consensus::{ConsensusEngine, ScoreRecord};
//! use swarm_matrix::{catalog, NodeMatrix};
//!
//! let matrix = NodeMatrix::new(catalog::canonical()).unwrap();
//! let engine = ConsensusEngine::new(&matrix);
//!
//! let vote = engine.quantum_vote("release 3.2").unwrap();
//! assert_eq!(vote.approved, vote.yes_weight > vote.no_weight);
//!
//! let records = [ScoreRecord::new("a.py", 60.0), ScoreRecord::new("b.py", 100.0)];
//! let quality = engine.phi_weighted_records(&records).unwrap();
//! assert!(quality.value > 80.0);
//! ```

pub mod average;
mod engine;
mod error;
pub mod vote;

pub use average::{phi_weighted, AverageOutcome, ScoreRecord};
pub use engine::{Algorithm, ConsensusEngine, ConsensusRecord, ConsensusRequest};
pub use error::{ConsensusError, Result};
pub use vote::{stable_hash, tally, Vote, VoteOutcome};
