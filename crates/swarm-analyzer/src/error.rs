//! Error types for swarm-analyzer.

use thiserror::Error;

/// Result type for analyzer operations.
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Errors that can occur while scoring source text.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A detection pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The content exceeds the configured size limit.
    #[error("{path}: {size} bytes exceeds limit of {limit}")]
    TooLarge {
        path: String,
        size: usize,
        limit: usize,
    },
}
