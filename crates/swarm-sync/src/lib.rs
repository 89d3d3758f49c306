//! Swarm Cascade Synchronization
//!
//! Drives per-node coherence upward in four stages of increasing strength,
//! modeling staged signal propagation across the swarm.
//!
//! # Protocol
//!
//! A full sync runs [`Scale::Micro`], [`Scale::Meso`], [`Scale::Macro`] and
//! [`Scale::Meta`] in that order. Each stage multiplies every node's
//! coherence by `1 + 0.1 × multiplier`, capped at 1.0, yielding to the
//! runtime between node updates. Swarm coherence is recorded after each
//! stage.
//!
//! Because every factor is greater than one, coherence is monotonically
//! non-decreasing: per node, per stage, and swarm-wide.
//!
//! # Example
//!
//! ```rust,no_run
//! use swarm_matrix::{catalog, NodeMatrix};
//! use swarm_sync::{CascadeEngine, SyncConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let matrix = NodeMatrix::new(catalog::canonical())?;
//! let engine = CascadeEngine::new(matrix, SyncConfig::from_env());
//!
//! let report = engine.full_sync().await?;
//! for (scale, coherence) in &report.stages {
//!     println!("{scale}: {coherence:.4}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod scale;

pub use config::SyncConfig;
pub use engine::{CascadeEngine, SharedMatrix, SyncReport, SyncStatus};
pub use error::{Result, SyncError};
pub use scale::Scale;
