//! Swarm-wide coherence aggregate.

use crate::SwarmNode;

/// Derived-weight-normalized average of node coherence.
///
/// `Σ(coherence × derived_weight) / Σ(derived_weight)`, or 0 when the total
/// derived weight is 0 (empty or all-zero-weight matrices).
pub fn swarm_coherence<'a, I>(nodes: I) -> f64
where
    I: IntoIterator<Item = &'a SwarmNode>,
{
    let (weighted, total) = nodes.into_iter().fold((0.0, 0.0), |(weighted, total), node| {
        let w = node.derived_weight();
        (weighted + node.coherence() * w, total + w)
    });

    if total > 0.0 {
        weighted / total
    } else {
        0.0
    }
}
