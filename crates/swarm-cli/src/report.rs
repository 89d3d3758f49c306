//! Run report.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use swarm_analyzer::AnalysisResult;
use swarm_consensus::ConsensusRecord;
use swarm_matrix::{NodeSnapshot, PHI};
use swarm_sync::SyncReport;
use tracing::info;

/// Resonance frequency stamped on every report, in Hz.
pub const RESONANCE_HZ: f64 = 7777.77;

/// Hex characters kept from the seal digest.
const SEAL_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: DateTime<Utc>,
    pub version: String,
    /// Identifies this run; derived from the timestamp.
    pub seal: String,
    pub phi_constant: f64,
    pub resonance_hz: f64,
    pub sync: SyncSection,
    pub analysis: AnalysisSummary,
    pub consensus: Vec<ConsensusRecord>,
    pub swarm: SwarmSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncSection {
    /// `None` when the sync phase was skipped.
    pub results: Option<SyncReport>,
    pub final_coherence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub files_analyzed: usize,
    pub total_issues: usize,
    /// Plain mean of the file scores, 0 with no files.
    pub average_score: f64,
    pub details: Vec<AnalysisResult>,
}

impl AnalysisSummary {
    pub fn new(details: Vec<AnalysisResult>) -> Self {
        let files_analyzed = details.len();
        let total_issues = details.iter().map(|r| r.issues.len()).sum();
        let average_score = if details.is_empty() {
            0.0
        } else {
            details.iter().map(|r| r.score).sum::<f64>() / files_analyzed as f64
        };
        Self {
            files_analyzed,
            total_issues,
            average_score,
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwarmSection {
    pub node_count: usize,
    pub nodes: Vec<NodeSnapshot>,
}

impl SwarmSection {
    pub fn new(nodes: Vec<NodeSnapshot>) -> Self {
        Self {
            node_count: nodes.len(),
            nodes,
        }
    }
}

/// First 32 hex characters of the BLAKE3 digest of the RFC 3339 timestamp.
pub fn seal(timestamp: &DateTime<Utc>) -> String {
    let digest = blake3::hash(timestamp.to_rfc3339().as_bytes());
    let mut hex = hex::encode(digest.as_bytes());
    hex.truncate(SEAL_LEN);
    hex
}

impl Report {
    pub fn new(
        timestamp: DateTime<Utc>,
        sync: SyncSection,
        analysis: AnalysisSummary,
        consensus: Vec<ConsensusRecord>,
        swarm: SwarmSection,
    ) -> Self {
        Self {
            seal: seal(&timestamp),
            timestamp,
            version: env!("CARGO_PKG_VERSION").to_string(),
            phi_constant: PHI,
            resonance_hz: RESONANCE_HZ,
            sync,
            analysis,
            consensus,
            swarm,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the report to `path` if its parent directory exists.
    ///
    /// Returns whether the file was written.
    pub async fn write_if_parent_exists(&self, path: &Path) -> anyhow::Result<bool> {
        let parent_exists = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                tokio::fs::try_exists(parent).await.unwrap_or(false)
            }
            _ => true,
        };
        if !parent_exists {
            info!(path = %path.display(), "output directory missing, report not saved");
            return Ok(false);
        }

        let json = self.to_json().context("serializing report")?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!(path = %path.display(), "report saved");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use swarm_analyzer::{Finding, Severity};

    fn result(path: &str, score: f64, issues: usize) -> AnalysisResult {
        AnalysisResult {
            path: path.into(),
            score,
            complexity: 1,
            maintainability: 100.0,
            issues: vec![
                Finding {
                    severity: Severity::Warning,
                    kind: "security".into(),
                    message: "m".into(),
                };
                issues
            ],
        }
    }

    fn report() -> Report {
        let ts = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        Report::new(
            ts,
            SyncSection {
                results: None,
                final_coherence: 0.5,
            },
            AnalysisSummary::new(vec![result("a.py", 90.0, 1), result("b.py", 70.0, 2)]),
            Vec::new(),
            SwarmSection::new(Vec::new()),
        )
    }

    #[test]
    fn seal_is_stable_hex() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let first = seal(&ts);
        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(first, seal(&ts));
        assert_ne!(first, seal(&(ts + chrono::Duration::seconds(1))));
    }

    #[test]
    fn summary_totals() {
        let summary = AnalysisSummary::new(vec![result("a.py", 90.0, 1), result("b.py", 70.0, 2)]);
        assert_eq!(summary.files_analyzed, 2);
        assert_eq!(summary.total_issues, 3);
        assert_eq!(summary.average_score, 80.0);
    }

    #[test]
    fn empty_summary_averages_zero() {
        let summary = AnalysisSummary::new(Vec::new());
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.files_analyzed, 0);
    }

    #[test]
    fn json_layout() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert!((json["phi_constant"].as_f64().unwrap() - PHI).abs() < 1e-12);
        assert_eq!(json["resonance_hz"].as_f64(), Some(7777.77));
        assert_eq!(json["sync"]["results"], serde_json::Value::Null);
        assert_eq!(json["analysis"]["total_issues"], 3);
        assert_eq!(json["analysis"]["details"][1]["path"], "b.py");
        assert_eq!(json["analysis"]["details"][0]["issues"][0]["type"], "security");
        assert_eq!(json["swarm"]["node_count"], 0);
    }

    #[tokio::test]
    async fn writes_only_into_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let report = report();

        let missing = dir.path().join("data/exports/report.json");
        assert!(!report.write_if_parent_exists(&missing).await.unwrap());
        assert!(!missing.exists());

        let present = dir.path().join("report.json");
        assert!(report.write_if_parent_exists(&present).await.unwrap());
        let back: Report = serde_json::from_str(&std::fs::read_to_string(present).unwrap()).unwrap();
        assert_eq!(back.seal, report.seal);
        assert_eq!(back.timestamp, report.timestamp);
        assert_eq!(back.analysis.details, report.analysis.details);
    }
}
