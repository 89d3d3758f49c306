//! Entanglement graph construction.
//!
//! Adjacency is derived from two rules over the ordered matrix:
//! - **Ring**: position `i` links to `i - 1` and `i + 1` when they exist.
//!   Boundary nodes have a single ring neighbor.
//! - **Quantum clique**: every [`Layer::Quantum`](crate::Layer::Quantum) node
//!   links to every other quantum node, regardless of position.
//!
//! Links are deduplicated per node and never include the node itself. The
//! clique is symmetric by construction; the ring is symmetric as well, so
//! the full relation is symmetric.
//!
//! Construction is a pure, total function of the matrix: the same specs
//! always produce identical adjacency lists, and an empty matrix produces
//! an empty graph.

use crate::node::{NodeId, NodeSpec};

/// Maximum ring neighbors per node.
pub const RING_DEGREE: usize = 2;

/// Ring neighbor positions of `index` in a matrix of length `len`.
///
/// Predecessor first, then successor.
pub fn ring_neighbors(len: usize, index: usize) -> impl Iterator<Item = usize> {
    let prev = (index > 0 && index < len).then(|| index - 1);
    let next = (index + 1 < len).then_some(index + 1);
    prev.into_iter().chain(next)
}

/// Build the adjacency list of every position in `specs`.
///
/// The returned vector is parallel to `specs`.
pub fn build(specs: &[NodeSpec]) -> Vec<Vec<NodeId>> {
    let quantum: Vec<usize> = specs
        .iter()
        .enumerate()
        .filter(|(_, spec)| spec.layer.is_quantum())
        .map(|(i, _)| i)
        .collect();

    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let mut links: Vec<NodeId> = Vec::with_capacity(RING_DEGREE + quantum.len());
            let mut link = |j: usize| {
                let id = &specs[j].id;
                if *id != spec.id && !links.contains(id) {
                    links.push(id.clone());
                }
            };

            for j in ring_neighbors(specs.len(), i) {
                link(j);
            }
            if spec.layer.is_quantum() {
                for &j in &quantum {
                    link(j);
                }
            }
            links
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layer;
    use proptest::prelude::*;

    fn spec(id: &str, layer: Layer) -> NodeSpec {
        NodeSpec::new(id, id, layer, 1.0)
    }

    fn ids(links: &[NodeId]) -> Vec<&str> {
        links.iter().map(NodeId::as_str).collect()
    }

    #[test]
    fn empty_matrix_has_empty_graph() {
        assert!(build(&[]).is_empty());
    }

    #[test]
    fn single_node_is_isolated() {
        let graph = build(&[spec("A", Layer::Quantum)]);
        assert_eq!(graph, vec![Vec::<NodeId>::new()]);
    }

    #[test]
    fn ring_neighbor_positions() {
        assert_eq!(ring_neighbors(5, 0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(ring_neighbors(5, 2).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(ring_neighbors(5, 4).collect::<Vec<_>>(), vec![3]);
        assert_eq!(ring_neighbors(1, 0).count(), 0);
        assert_eq!(ring_neighbors(0, 0).count(), 0);
    }

    #[test]
    fn three_node_example() {
        let graph = build(&[
            spec("A", Layer::Infrastructure),
            spec("B", Layer::Quantum),
            spec("C", Layer::Quantum),
        ]);
        assert_eq!(ids(&graph[0]), vec!["B"]);
        assert_eq!(ids(&graph[1]), vec!["A", "C"]);
        // C is B's ring neighbor and clique peer: linked once.
        assert_eq!(ids(&graph[2]), vec!["B"]);
    }

    #[test]
    fn quantum_clique_spans_positions() {
        let graph = build(&[
            spec("A", Layer::Quantum),
            spec("B", Layer::Application),
            spec("C", Layer::Application),
            spec("D", Layer::Quantum),
        ]);
        assert_eq!(ids(&graph[0]), vec!["B", "D"]);
        assert_eq!(ids(&graph[1]), vec!["A", "C"]);
        assert_eq!(ids(&graph[2]), vec!["B", "D"]);
        assert_eq!(ids(&graph[3]), vec!["C", "A"]);
    }

    fn layer_strategy() -> impl Strategy<Value = Layer> {
        prop::sample::select(Layer::ALL.to_vec())
    }

    fn specs_strategy() -> impl Strategy<Value = Vec<NodeSpec>> {
        prop::collection::vec(layer_strategy(), 0..40).prop_map(|layers| {
            layers
                .into_iter()
                .enumerate()
                .map(|(i, layer)| spec(&format!("N{i}"), layer))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn construction_is_deterministic(specs in specs_strategy()) {
            prop_assert_eq!(build(&specs), build(&specs));
        }

        #[test]
        fn ring_degree_matches_position(specs in specs_strategy()) {
            let n = specs.len();
            prop_assume!(n >= 2);
            let graph = build(&specs);
            for (i, links) in graph.iter().enumerate() {
                let ring: Vec<_> = ring_neighbors(n, i).collect();
                let expected = if i == 0 || i == n - 1 { 1 } else { 2 };
                prop_assert_eq!(ring.len(), expected);
                for j in ring {
                    prop_assert!(links.contains(&specs[j].id));
                }
            }
        }

        #[test]
        fn quantum_nodes_are_mutually_entangled(specs in specs_strategy()) {
            let graph = build(&specs);
            for (i, a) in specs.iter().enumerate() {
                for (j, b) in specs.iter().enumerate() {
                    if i != j && a.layer.is_quantum() && b.layer.is_quantum() {
                        prop_assert!(graph[i].contains(&b.id));
                        prop_assert!(graph[j].contains(&a.id));
                    }
                }
            }
        }

        #[test]
        fn no_self_links_or_duplicates(specs in specs_strategy()) {
            let graph = build(&specs);
            for (i, links) in graph.iter().enumerate() {
                prop_assert!(!links.contains(&specs[i].id));
                let mut sorted = links.clone();
                sorted.sort();
                sorted.dedup();
                prop_assert_eq!(sorted.len(), links.len());
            }
        }

        #[test]
        fn relation_is_symmetric(specs in specs_strategy()) {
            let graph = build(&specs);
            for (i, links) in graph.iter().enumerate() {
                for other in links {
                    let j = specs.iter().position(|s| &s.id == other).unwrap();
                    prop_assert!(graph[j].contains(&specs[i].id));
                }
            }
        }
    }
}
