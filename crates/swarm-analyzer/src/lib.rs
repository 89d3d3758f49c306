//! Swarm Analyzer
//!
//! Scores source text for the consensus engine. Each file gets a cyclomatic
//! complexity estimate, a maintainability index and a list of security
//! findings, folded into a quality score in `[0, 100]`:
//!
//! ```text
//! score = max(0, 100 − min(20, max(0, complexity − 10)) − 15·critical − 5·warning)
//! ```
//!
//! ```
//! use swarm_analyzer::{Analyzer, AnalyzerConfig};
//!
//! let mut analyzer = Analyzer::new(AnalyzerConfig::default()).unwrap();
//! let result = analyzer.analyze("x = eval(input())", "main.py").unwrap();
//! assert_eq!(result.score, 85.0);
//! assert_eq!(result.record().identifier, "main.py");
//! ```

mod analyzer;
mod error;
pub mod metrics;
pub mod security;

pub use analyzer::{quality_score, AnalysisResult, Analyzer, AnalyzerConfig, AnalyzerMetrics};
pub use error::{AnalyzerError, Result};
pub use metrics::Metrics;
pub use security::{Finding, SecurityScanner, Severity};
