//! File-level quality scoring.

use serde::{Deserialize, Serialize};
use swarm_consensus::ScoreRecord;
use tracing::{debug, warn};

use crate::error::{AnalyzerError, Result};
use crate::metrics::Metrics;
use crate::security::{Finding, SecurityScanner};

/// Complexity above which the score starts to drop.
const COMPLEXITY_ALLOWANCE: u32 = 10;
/// Most points complexity alone can cost.
const MAX_COMPLEXITY_PENALTY: f64 = 20.0;

/// Analyzer limits.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Content larger than this many bytes is rejected.
    pub max_file_size: usize,
    /// Minimum score for [`AnalysisResult::passes`].
    pub quality_threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_file_size: 100_000,
            quality_threshold: 70.0,
        }
    }
}

impl AnalyzerConfig {
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: usize) -> Self {
        self.max_file_size = bytes;
        self
    }

    #[must_use]
    pub fn with_quality_threshold(mut self, threshold: f64) -> Self {
        self.quality_threshold = threshold;
        self
    }
}

/// Running totals across every analyzed file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerMetrics {
    pub files_analyzed: usize,
    pub issues_found: usize,
}

/// Score and findings for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub path: String,
    pub score: f64,
    pub complexity: u32,
    pub maintainability: f64,
    pub issues: Vec<Finding>,
}

impl AnalysisResult {
    /// The consensus input for this file.
    pub fn record(&self) -> ScoreRecord {
        ScoreRecord::new(self.path.clone(), self.score)
    }

    pub fn passes(&self, threshold: f64) -> bool {
        self.score >= threshold
    }
}

/// `max(0, 100 − min(20, max(0, complexity − 10)) − Σ penalties)`.
pub fn quality_score(complexity: u32, issues: &[Finding]) -> f64 {
    let complexity_penalty = f64::from(complexity.saturating_sub(COMPLEXITY_ALLOWANCE))
        .min(MAX_COMPLEXITY_PENALTY);
    let issue_penalty: f64 = issues.iter().map(|i| i.severity.penalty()).sum();
    (100.0 - complexity_penalty - issue_penalty).max(0.0)
}

/// Scores source text and keeps running totals.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    metrics: Metrics,
    scanner: SecurityScanner,
    totals: AnalyzerMetrics,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            config,
            metrics: Metrics::new()?,
            scanner: SecurityScanner::new()?,
            totals: AnalyzerMetrics::default(),
        })
    }

    pub fn metrics(&self) -> AnalyzerMetrics {
        self.totals
    }

    /// Score `content`, recording it under `path`.
    pub fn analyze(&mut self, content: &str, path: &str) -> Result<AnalysisResult> {
        if content.len() > self.config.max_file_size {
            warn!(path, size = content.len(), "skipping oversized file");
            return Err(AnalyzerError::TooLarge {
                path: path.to_string(),
                size: content.len(),
                limit: self.config.max_file_size,
            });
        }

        let complexity = self.metrics.complexity(content);
        let maintainability = self.metrics.maintainability(content, complexity);
        let issues = self.scanner.scan(content);
        let score = quality_score(complexity, &issues);

        self.totals.files_analyzed += 1;
        self.totals.issues_found += issues.len();

        debug!(path, score, complexity, issues = issues.len(), "analyzed");
        Ok(AnalysisResult {
            path: path.to_string(),
            score,
            complexity,
            maintainability,
            issues,
        })
    }

    /// Whether `result` meets the configured quality threshold.
    pub fn passes(&self, result: &AnalysisResult) -> bool {
        result.passes(self.config.quality_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::Severity;
    use proptest::prelude::*;

    fn analyzer() -> Analyzer {
        Analyzer::new(AnalyzerConfig::default()).unwrap()
    }

    fn finding(severity: Severity) -> Finding {
        Finding {
            severity,
            kind: "security".into(),
            message: String::new(),
        }
    }

    #[test]
    fn clean_file_scores_100() {
        let mut a = analyzer();
        let result = a.analyze("x = 1\n", "clean.py").unwrap();
        assert_eq!(result.score, 100.0);
        assert_eq!(result.complexity, 1);
        assert!(result.issues.is_empty());
        assert!(a.passes(&result));
    }

    #[test]
    fn findings_cost_points() {
        let mut a = analyzer();
        let result = a
            .analyze("password = 'x'\nel.innerHTML = y\n", "bad.js")
            .unwrap();
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.score, 80.0);
    }

    #[test]
    fn complexity_penalty_is_capped() {
        assert_eq!(quality_score(10, &[]), 100.0);
        assert_eq!(quality_score(15, &[]), 95.0);
        assert_eq!(quality_score(500, &[]), 80.0);
    }

    #[test]
    fn score_never_negative() {
        let issues = vec![finding(Severity::Critical); 10];
        assert_eq!(quality_score(100, &issues), 0.0);
    }

    #[test]
    fn totals_accumulate() {
        let mut a = analyzer();
        a.analyze("eval(x)", "a.js").unwrap();
        a.analyze("y = 2", "b.py").unwrap();
        assert_eq!(
            a.metrics(),
            AnalyzerMetrics {
                files_analyzed: 2,
                issues_found: 1
            }
        );
    }

    #[test]
    fn oversized_content_is_rejected() {
        let mut a = Analyzer::new(AnalyzerConfig::default().with_max_file_size(4)).unwrap();
        let err = a.analyze("x = 12345", "big.py").unwrap_err();
        assert!(matches!(err, AnalyzerError::TooLarge { size: 9, limit: 4, .. }));
        assert_eq!(a.metrics().files_analyzed, 0);
    }

    #[test]
    fn record_carries_path_and_score() {
        let mut a = analyzer();
        let result = a.analyze("eval(x)", "a.js").unwrap();
        let record = result.record();
        assert_eq!(record.identifier, "a.js");
        assert_eq!(record.score, 85.0);
        assert!(result.passes(85.0));
        assert!(!result.passes(85.1));
    }

    #[test]
    fn threshold_is_configurable() {
        let mut a = Analyzer::new(AnalyzerConfig::default().with_quality_threshold(90.0)).unwrap();
        let result = a.analyze("eval(x)", "a.js").unwrap();
        assert!(!a.passes(&result));
    }

    proptest! {
        #[test]
        fn score_stays_in_range(content in ".{0,400}") {
            let mut a = analyzer();
            let result = a.analyze(&content, "p.txt").unwrap();
            prop_assert!((0.0..=100.0).contains(&result.score));
            prop_assert!((0.0..=100.0).contains(&result.maintainability));
            prop_assert!(result.complexity >= 1);
        }
    }
}
