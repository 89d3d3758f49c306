//! Error types for swarm-sync.

use thiserror::Error;

use crate::engine::SyncStatus;

/// Result type for swarm-sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that can occur while driving a cascade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Another cascade or full sync already owns this engine.
    #[error("sync engine busy ({status})")]
    Busy { status: SyncStatus },
}
