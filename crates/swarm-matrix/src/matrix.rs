//! The ordered node matrix.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::coherence::swarm_coherence;
use crate::entanglement;
use crate::error::{MatrixError, Result};
use crate::node::{NodeSnapshot, NodeSpec, SwarmNode};

/// A fixed, ordered sequence of nodes with their entanglement graph.
///
/// Nodes are never added or removed after construction. Only coherence is
/// mutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeMatrix {
    nodes: Vec<SwarmNode>,
}

impl NodeMatrix {
    /// Validate `specs` and build the matrix and its entanglement graph.
    ///
    /// Fails on an empty list, duplicate ids, or weights that are negative
    /// or non-finite.
    pub fn new(specs: Vec<NodeSpec>) -> Result<Self> {
        if specs.is_empty() {
            return Err(MatrixError::Empty);
        }

        let mut seen = HashSet::with_capacity(specs.len());
        for (position, spec) in specs.iter().enumerate() {
            if !spec.weight.is_finite() || spec.weight < 0.0 {
                return Err(MatrixError::InvalidWeight {
                    id: spec.id.to_string(),
                    weight: spec.weight,
                });
            }
            if !seen.insert(&spec.id) {
                return Err(MatrixError::DuplicateId {
                    id: spec.id.to_string(),
                    position,
                });
            }
        }

        Ok(Self::build(specs))
    }

    /// The degenerate matrix with no nodes. Every read on it is total.
    pub fn empty() -> Self {
        warn!("constructing empty node matrix");
        Self::build(Vec::new())
    }

    fn build(specs: Vec<NodeSpec>) -> Self {
        let graph = entanglement::build(&specs);
        let links: usize = graph.iter().map(Vec::len).sum();
        debug!(nodes = specs.len(), links, "built entanglement graph");

        let nodes = specs
            .into_iter()
            .zip(graph)
            .map(|(spec, links)| SwarmNode::new(spec, links))
            .collect();
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SwarmNode> {
        self.nodes.iter()
    }

    pub fn node(&self, index: usize) -> Option<&SwarmNode> {
        self.nodes.get(index)
    }

    /// Mutable access for coherence updates.
    pub fn node_mut(&mut self, index: usize) -> Option<&mut SwarmNode> {
        self.nodes.get_mut(index)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id().as_str() == id)
    }

    pub fn get(&self, id: &str) -> Option<&SwarmNode> {
        self.position(id).map(|i| &self.nodes[i])
    }

    /// Set a node's coherence by id (clamped into `[0, 1]`).
    pub fn set_coherence(&mut self, id: &str, value: f64) -> Result<()> {
        let index = self
            .position(id)
            .ok_or_else(|| MatrixError::UnknownNode(id.to_owned()))?;
        self.nodes[index].set_coherence(value)
    }

    /// Whether `a` lists `b` among its entanglement links.
    pub fn are_entangled(&self, a: &str, b: &str) -> bool {
        self.get(a)
            .is_some_and(|node| node.entanglement().iter().any(|id| id.as_str() == b))
    }

    /// Derived-weight-normalized average coherence, 0 for an empty matrix.
    pub fn swarm_coherence(&self) -> f64 {
        swarm_coherence(&self.nodes)
    }

    /// Per-node snapshot in matrix order.
    pub fn snapshot(&self) -> Vec<NodeSnapshot> {
        self.nodes.iter().map(SwarmNode::snapshot).collect()
    }
}

impl<'a> IntoIterator for &'a NodeMatrix {
    type Item = &'a SwarmNode;
    type IntoIter = std::slice::Iter<'a, SwarmNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
