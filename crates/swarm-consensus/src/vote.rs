//! Quantum-weighted voting.
//!
//! Every node casts a deterministic vote on a proposal:
//!
//! ```text
//! vote = H(proposal ‖ node_id) is even
//! ```
//!
//! where `H` is the first eight bytes of the BLAKE3 digest read as a
//! little-endian `u64`. Same proposal and node always give the same vote.
//!
//! Quantum-layer nodes vote with their derived weight (`weight × φ`),
//! everyone else with their plain weight. A proposal is approved only if
//! the yes-weight strictly exceeds the no-weight; a tie is rejected.

use serde::{Deserialize, Serialize};
use swarm_matrix::SwarmNode;

/// Deterministic 64-bit hash of `proposal ‖ node_id`.
pub fn stable_hash(proposal: &str, node_id: &str) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(proposal.as_bytes());
    hasher.update(node_id.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(prefix)
}

/// A single node's vote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vote {
    pub approve: bool,
    pub weight: f64,
}

/// Weight a node votes with.
pub fn voting_weight(node: &SwarmNode) -> f64 {
    if node.layer().is_quantum() {
        node.derived_weight()
    } else {
        node.weight()
    }
}

/// Cast `node`'s vote on `proposal`.
pub fn cast(proposal: &str, node: &SwarmNode) -> Vote {
    Vote {
        approve: stable_hash(proposal, node.id().as_str()) % 2 == 0,
        weight: voting_weight(node),
    }
}

/// Result of a weighted vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub approved: bool,
    pub yes_weight: f64,
    pub no_weight: f64,
    pub yes_votes: usize,
    pub no_votes: usize,
}

/// Sum votes into an outcome. `approved` iff yes-weight > no-weight.
pub fn tally<I>(votes: I) -> VoteOutcome
where
    I: IntoIterator<Item = Vote>,
{
    let mut outcome = VoteOutcome {
        approved: false,
        yes_weight: 0.0,
        no_weight: 0.0,
        yes_votes: 0,
        no_votes: 0,
    };

    for vote in votes {
        if vote.approve {
            outcome.yes_weight += vote.weight;
            outcome.yes_votes += 1;
        } else {
            outcome.no_weight += vote.weight;
            outcome.no_votes += 1;
        }
    }

    outcome.approved = outcome.yes_weight > outcome.no_weight;
    outcome
}
