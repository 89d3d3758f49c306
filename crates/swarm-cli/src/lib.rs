//! Swarm CLI
//!
//! Library half of the `swarm` binary. A run has four phases:
//!
//! 1. cascade sync of the canonical matrix across all four scales
//! 2. static analysis of the source files under the root
//! 3. consensus: φ-weighted quality score, plus a quantum vote when a
//!    proposal is given
//! 4. a JSON report, written only when the output directory exists

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod scan;

pub use cli::{Cli, RunOptions};
pub use pipeline::{Pipeline, RunOutcome};
pub use report::{AnalysisSummary, Report, SwarmSection, SyncSection, RESONANCE_HZ};
pub use scan::scan;
