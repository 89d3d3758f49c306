//! Cascade Engine - staged coherence propagation over the node matrix.
//!
//! Each stage walks the matrix once and raises every node's coherence by the
//! scale's amplification factor, capped at 1.0:
//!
//! ```text
//! coherence ← min(1, coherence × (1 + 0.1 × multiplier))
//! ```
//!
//! # Scheduling
//!
//! The engine yields to the runtime after every node update. No stage ever
//! waits on real I/O, so a yield always resumes promptly.
//!
//! # Ownership
//!
//! At most one cascade runs per engine. A full sync holds ownership across
//! all four stages; a concurrent request fails with [`SyncError::Busy`]
//! instead of interleaving updates.
//!
//! # Cancellation
//!
//! Dropping a cascade future is safe at any await point. Nodes already
//! updated keep their new coherence, the rest keep their previous value,
//! and the engine returns to [`SyncStatus::Idle`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use swarm_matrix::{NodeMatrix, NodeSnapshot};
use tokio::sync::RwLock;
use tracing::{debug, info, trace};

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::scale::Scale;

/// Node matrix shared between the engine and its readers.
pub type SharedMatrix = Arc<RwLock<NodeMatrix>>;

/// What the engine is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "scale", rename_all = "snake_case")]
pub enum SyncStatus {
    #[default]
    Idle,
    SyncingAtScale(Scale),
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::SyncingAtScale(scale) => write!(f, "syncing_{scale}"),
        }
    }
}

/// Outcome of a full multi-scale sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncReport {
    /// Swarm coherence observed right after each stage.
    pub stages: BTreeMap<Scale, f64>,
    /// Swarm coherence after the last stage.
    pub final_coherence: f64,
}

impl SyncReport {
    pub fn coherence_at(&self, scale: Scale) -> Option<f64> {
        self.stages.get(&scale).copied()
    }

    /// Whether coherence never dropped from one stage to the next.
    pub fn is_monotonic(&self) -> bool {
        self.stages
            .values()
            .zip(self.stages.values().skip(1))
            .all(|(a, b)| b >= a)
    }
}

/// Resets the engine status when a stage ends or its future is dropped.
struct StageGuard<'a> {
    status: &'a Mutex<SyncStatus>,
}

impl<'a> StageGuard<'a> {
    fn enter(status: &'a Mutex<SyncStatus>, scale: Scale) -> Self {
        *status.lock() = SyncStatus::SyncingAtScale(scale);
        Self { status }
    }
}

impl Drop for StageGuard<'_> {
    fn drop(&mut self) {
        *self.status.lock() = SyncStatus::Idle;
    }
}

/// Drives cascade synchronization over a shared node matrix.
#[derive(Debug)]
pub struct CascadeEngine {
    matrix: SharedMatrix,
    config: SyncConfig,
    status: Mutex<SyncStatus>,
    /// Held for the whole of a cascade or full sync.
    owner: tokio::sync::Mutex<()>,
    last_report: Mutex<Option<SyncReport>>,
}

impl CascadeEngine {
    /// Create an engine owning `matrix`.
    pub fn new(matrix: NodeMatrix, config: SyncConfig) -> Self {
        Self::with_shared(Arc::new(RwLock::new(matrix)), config)
    }

    /// Create an engine over a matrix shared with other readers.
    pub fn with_shared(matrix: SharedMatrix, config: SyncConfig) -> Self {
        Self {
            matrix,
            config,
            status: Mutex::new(SyncStatus::Idle),
            owner: tokio::sync::Mutex::new(()),
            last_report: Mutex::new(None),
        }
    }

    /// Handle to the shared matrix.
    pub fn matrix(&self) -> SharedMatrix {
        Arc::clone(&self.matrix)
    }

    pub fn status(&self) -> SyncStatus {
        *self.status.lock()
    }

    /// Report of the last completed full sync.
    pub fn last_report(&self) -> Option<SyncReport> {
        self.last_report.lock().clone()
    }

    /// Current swarm coherence.
    pub async fn swarm_coherence(&self) -> f64 {
        self.matrix.read().await.swarm_coherence()
    }

    /// Current per-node snapshot.
    pub async fn snapshot(&self) -> Vec<NodeSnapshot> {
        self.matrix.read().await.snapshot()
    }

    /// Run a single cascade stage at `scale` and return the new swarm coherence.
    pub async fn cascade_sync(&self, scale: Scale) -> Result<f64> {
        let _owner = self.acquire()?;
        Ok(self.run_stage(scale).await)
    }

    /// Run every scale in ascending order, recording coherence after each stage.
    pub async fn full_sync(&self) -> Result<SyncReport> {
        let _owner = self.acquire()?;
        info!("full sync started");

        let mut stages = BTreeMap::new();
        let mut final_coherence = 0.0;
        for scale in Scale::ALL {
            let coherence = self.run_stage(scale).await;
            info!(%scale, coherence, "stage complete");
            stages.insert(scale, coherence);
            final_coherence = coherence;
        }
        // No await past the last stage: ownership is never held while idle.
        info!(final_coherence, "full sync complete");

        let report = SyncReport {
            stages,
            final_coherence,
        };
        *self.last_report.lock() = Some(report.clone());
        Ok(report)
    }

    fn acquire(&self) -> Result<tokio::sync::MutexGuard<'_, ()>> {
        self.owner.try_lock().map_err(|_| {
            let status = self.status();
            debug!(%status, "rejecting concurrent sync");
            SyncError::Busy { status }
        })
    }

    async fn run_stage(&self, scale: Scale) -> f64 {
        let _stage = StageGuard::enter(&self.status, scale);
        let factor = scale.amplification();
        let len = self.matrix.read().await.len();
        debug!(%scale, factor, nodes = len, "cascade stage started");

        for index in 0..len {
            if let Some(node) = self.matrix.write().await.node_mut(index) {
                let coherence = node.amplify(factor);
                trace!(node = %node.id(), coherence, "node amplified");
            }
            self.pause().await;
        }

        self.swarm_coherence().await
    }

    async fn pause(&self) {
        if self.config.step_delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.config.step_delay).await;
        }
    }
}
