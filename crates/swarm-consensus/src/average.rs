//! φ-weighted averaging.
//!
//! Combines an ordered score sequence into one scalar, giving exponentially
//! more weight to later entries:
//!
//! ```text
//! average = Σ(vᵢ × φⁱ) / Σ(φⁱ)
//! ```
//!
//! An empty sequence averages to 0.

use serde::{Deserialize, Serialize};
use swarm_matrix::PHI;

use crate::error::{ConsensusError, Result};

/// A scored item handed over by the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub identifier: String,
    pub score: f64,
}

impl ScoreRecord {
    pub fn new(identifier: impl Into<String>, score: f64) -> Self {
        Self {
            identifier: identifier.into(),
            score,
        }
    }
}

/// Result of a φ-weighted average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageOutcome {
    pub value: f64,
    pub inputs: usize,
}

/// Reject NaN and infinite scores.
pub fn validate(scores: &[f64]) -> Result<()> {
    match scores.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ConsensusError::NonFiniteScore {
            index,
            value: scores[index],
        }),
        None => Ok(()),
    }
}

/// `Σ(vᵢ × φⁱ) / Σ(φⁱ)`, or 0 for an empty sequence.
///
/// Computed as a running weighted mean, so the result is finite for any
/// finite input and stays within `[min, max]` of the scores.
pub fn phi_weighted(scores: &[f64]) -> Result<f64> {
    validate(scores)?;
    let Some((&first, rest)) = scores.split_first() else {
        return Ok(0.0);
    };

    let lo = scores.iter().copied().fold(first, f64::min);
    let hi = scores.iter().copied().fold(first, f64::max);

    // `span` is Σ φ^(k-i) over k ≤ i; the newest score's share is 1 / span.
    let mut span = 1.0;
    let mut mean = first;
    for &v in rest {
        span = span / PHI + 1.0;
        let share = 1.0 / span;
        // Halved so the difference of two extreme scores cannot overflow.
        let step = (v / 2.0 - mean / 2.0) * share;
        mean = (mean + step + step).clamp(lo, hi);
    }
    Ok(mean)
}
