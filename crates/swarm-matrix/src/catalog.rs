//! The canonical 26-node A–Z swarm catalog.

use crate::{Layer, NodeSpec};

const CANONICAL: [(&str, &str, Layer, f64); 26] = [
    ("A", "Analyzer", Layer::Intelligence, 1.0),
    ("B", "Builder", Layer::Infrastructure, 0.95),
    ("C", "Coordinator", Layer::Orchestration, 1.1),
    ("D", "Detector", Layer::Intelligence, 0.9),
    ("E", "Executor", Layer::Infrastructure, 1.0),
    ("F", "Formatter", Layer::Application, 0.85),
    ("G", "Generator", Layer::Application, 0.9),
    ("H", "Handler", Layer::Infrastructure, 0.95),
    ("I", "Indexer", Layer::Intelligence, 0.88),
    ("J", "Joiner", Layer::Orchestration, 0.92),
    ("K", "Keeper", Layer::Infrastructure, 0.87),
    ("L", "Loader", Layer::Infrastructure, 0.9),
    ("M", "Monitor", Layer::Intelligence, 1.05),
    ("N", "Normalizer", Layer::Application, 0.82),
    ("O", "Optimizer", Layer::Intelligence, 1.15),
    ("P", "Parser", Layer::Application, 0.95),
    ("Q", "Quantizer", Layer::Quantum, 1.618),
    ("R", "Router", Layer::Orchestration, 1.08),
    ("S", "Scheduler", Layer::Orchestration, 1.02),
    ("T", "Transformer", Layer::Application, 0.98),
    ("U", "Unifier", Layer::Orchestration, 0.96),
    ("V", "Validator", Layer::Intelligence, 1.12),
    ("W", "Watcher", Layer::Infrastructure, 0.91),
    ("X", "Executor", Layer::Quantum, 1.25),
    ("Y", "Yielder", Layer::Application, 0.84),
    ("Z", "Zenith", Layer::Quantum, 1.618),
];

/// Number of nodes in the canonical catalog.
pub const CANONICAL_SIZE: usize = CANONICAL.len();

/// Specs of the canonical catalog, in matrix order.
pub fn canonical() -> Vec<NodeSpec> {
    CANONICAL
        .iter()
        .map(|&(id, name, layer, weight)| NodeSpec::new(id, name, layer, weight))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_node_per_letter() {
        let ids: String = canonical().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(CANONICAL_SIZE, 26);
    }

    #[test]
    fn three_quantum_nodes() {
        let quantum: Vec<_> = canonical()
            .into_iter()
            .filter(|s| s.layer.is_quantum())
            .map(|s| s.id.to_string())
            .collect();
        assert_eq!(quantum, vec!["Q", "X", "Z"]);
    }

    #[test]
    fn every_layer_is_represented() {
        let specs = canonical();
        for layer in Layer::ALL {
            assert!(specs.iter().any(|s| s.layer == layer), "{layer} missing");
        }
    }
}
