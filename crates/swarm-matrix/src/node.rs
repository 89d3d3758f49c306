//! Swarm nodes and their configuration entries.

use std::borrow::Borrow;
use std::fmt;

use crate::error::{MatrixError, Result};
use crate::{Layer, INITIAL_COHERENCE, MAX_COHERENCE, PHI};

/// Stable short key identifying a node, unique within its matrix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Immutable configuration entry a node is built from.
///
/// A matrix is always constructed from an explicit list of specs, so tests
/// can inject synthetic matrices of any size or composition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSpec {
    pub id: NodeId,
    pub name: String,
    pub layer: Layer,
    pub weight: f64,
}

impl NodeSpec {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, layer: Layer, weight: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            layer,
            weight,
        }
    }

    /// Static weight scaled by φ.
    pub fn derived_weight(&self) -> f64 {
        self.weight * PHI
    }
}

/// A live node: configuration plus mutable coherence and its entanglement links.
#[derive(Debug, Clone, PartialEq)]
pub struct SwarmNode {
    spec: NodeSpec,
    coherence: f64,
    entanglement: Vec<NodeId>,
}

impl SwarmNode {
    pub(crate) fn new(spec: NodeSpec, entanglement: Vec<NodeId>) -> Self {
        debug_assert!(!entanglement.contains(&spec.id));
        Self {
            spec,
            coherence: INITIAL_COHERENCE,
            entanglement,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.spec.id
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn layer(&self) -> Layer {
        self.spec.layer
    }

    pub fn weight(&self) -> f64 {
        self.spec.weight
    }

    /// `weight × φ`. Computed on demand, never stored.
    pub fn derived_weight(&self) -> f64 {
        self.spec.derived_weight()
    }

    pub fn coherence(&self) -> f64 {
        self.coherence
    }

    /// Ids this node is entangled with, in construction order.
    pub fn entanglement(&self) -> &[NodeId] {
        &self.entanglement
    }

    /// Overwrite coherence, clamped into `[0, 1]`.
    pub fn set_coherence(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(MatrixError::InvalidCoherence {
                id: self.spec.id.to_string(),
                value,
            });
        }
        self.coherence = value.clamp(0.0, MAX_COHERENCE);
        Ok(())
    }

    /// Scale coherence by `factor`, capped at 1.0. Returns the new coherence.
    ///
    /// For `factor >= 1` this never decreases coherence.
    pub fn amplify(&mut self, factor: f64) -> f64 {
        let next = self.coherence * factor;
        if next.is_finite() {
            self.coherence = next.clamp(0.0, MAX_COHERENCE);
        }
        self.coherence
    }

    /// Plain structured view for report generation.
    pub fn snapshot(&self) -> NodeSnapshot {
        NodeSnapshot {
            id: self.spec.id.clone(),
            name: self.spec.name.clone(),
            layer: self.spec.layer,
            weight: self.spec.weight,
            derived_weight: self.derived_weight(),
            coherence: self.coherence,
            entanglement: self.entanglement.clone(),
        }
    }
}

/// Point-in-time copy of a node's state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub name: String,
    pub layer: Layer,
    pub weight: f64,
    pub derived_weight: f64,
    pub coherence: f64,
    pub entanglement: Vec<NodeId>,
}
