//! Consensus engine over a node matrix.

use std::fmt;

use serde::{Deserialize, Serialize};
use swarm_matrix::NodeMatrix;
use tracing::debug;

use crate::average::{self, AverageOutcome, ScoreRecord};
use crate::error::{ConsensusError, Result};
use crate::vote::{self, VoteOutcome};

/// The interchangeable consensus algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Hash-derived boolean votes weighted per layer.
    QuantumVote,
    /// φ-weighted average of an ordered score sequence.
    PhiWeighted,
}

impl Algorithm {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::QuantumVote => "quantum_vote",
            Self::PhiWeighted => "phi_weighted",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input to [`ConsensusEngine::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConsensusRequest {
    QuantumVote { proposal: String },
    PhiWeighted { records: Vec<ScoreRecord> },
}

impl ConsensusRequest {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::QuantumVote { .. } => Algorithm::QuantumVote,
            Self::PhiWeighted { .. } => Algorithm::PhiWeighted,
        }
    }
}

/// Result record of a consensus call, tagged with the algorithm that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum ConsensusRecord {
    QuantumVote(VoteOutcome),
    PhiWeighted(AverageOutcome),
}

impl ConsensusRecord {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::QuantumVote(_) => Algorithm::QuantumVote,
            Self::PhiWeighted(_) => Algorithm::PhiWeighted,
        }
    }
}

/// Stateless consensus over a borrowed node matrix.
#[derive(Debug, Clone, Copy)]
pub struct ConsensusEngine<'a> {
    matrix: &'a NodeMatrix,
}

impl<'a> ConsensusEngine<'a> {
    pub fn new(matrix: &'a NodeMatrix) -> Self {
        Self { matrix }
    }

    /// Every node votes on `proposal`; approved iff yes-weight > no-weight.
    pub fn quantum_vote<P>(&self, proposal: &P) -> Result<VoteOutcome>
    where
        P: fmt::Display + ?Sized,
    {
        let proposal = proposal.to_string();
        if proposal.is_empty() {
            return Err(ConsensusError::EmptyProposal);
        }

        let outcome = vote::tally(self.matrix.iter().map(|node| vote::cast(&proposal, node)));
        debug!(
            %proposal,
            approved = outcome.approved,
            yes = outcome.yes_weight,
            no = outcome.no_weight,
            "quantum vote"
        );
        Ok(outcome)
    }

    /// `Σ(vᵢ × φⁱ) / Σ(φⁱ)` over `scores`, 0 when empty.
    pub fn phi_weighted(&self, scores: &[f64]) -> Result<f64> {
        average::phi_weighted(scores)
    }

    /// φ-weighted average of record scores, in record order.
    pub fn phi_weighted_records(&self, records: &[ScoreRecord]) -> Result<AverageOutcome> {
        let scores: Vec<f64> = records.iter().map(|r| r.score).collect();
        let value = average::phi_weighted(&scores)?;
        debug!(inputs = records.len(), value, "phi-weighted average");
        Ok(AverageOutcome {
            value,
            inputs: records.len(),
        })
    }

    /// Dispatch a request to its algorithm.
    pub fn run(&self, request: &ConsensusRequest) -> Result<ConsensusRecord> {
        match request {
            ConsensusRequest::QuantumVote { proposal } => {
                self.quantum_vote(proposal.as_str()).map(ConsensusRecord::QuantumVote)
            }
            ConsensusRequest::PhiWeighted { records } => {
                self.phi_weighted_records(records).map(ConsensusRecord::PhiWeighted)
            }
        }
    }
}
