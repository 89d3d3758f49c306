//! The four-phase run: sync, analyze, consensus, report.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use swarm_analyzer::{AnalysisResult, Analyzer, AnalyzerConfig, AnalyzerMetrics};
use swarm_consensus::{ConsensusEngine, ConsensusRecord, ConsensusRequest, ScoreRecord};
use swarm_matrix::{catalog, NodeMatrix};
use swarm_sync::{CascadeEngine, SyncConfig};
use tracing::{info, warn};

use crate::cli::RunOptions;
use crate::report::{AnalysisSummary, Report, SwarmSection, SyncSection};
use crate::scan::scan;

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: Report,
    /// Where the report was saved, if it was.
    pub written_to: Option<PathBuf>,
    pub metrics: AnalyzerMetrics,
}

#[derive(Debug)]
pub struct Pipeline {
    engine: CascadeEngine,
    analyzer: Analyzer,
}

impl Pipeline {
    pub fn new(
        matrix: NodeMatrix,
        sync: SyncConfig,
        analyzer: AnalyzerConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            engine: CascadeEngine::new(matrix, sync),
            analyzer: Analyzer::new(analyzer).context("building analyzer")?,
        })
    }

    /// The 26-node catalog, sync settings from the environment.
    pub fn canonical() -> anyhow::Result<Self> {
        let matrix = NodeMatrix::new(catalog::canonical()).context("loading node catalog")?;
        info!(nodes = matrix.len(), "swarm matrix loaded");
        Self::new(matrix, SyncConfig::from_env(), AnalyzerConfig::default())
    }

    pub async fn run(mut self, options: &RunOptions) -> anyhow::Result<RunOutcome> {
        let sync_results = if options.sync {
            info!("phase 1: cascade sync");
            Some(self.engine.full_sync().await?)
        } else {
            info!("phase 1: cascade sync skipped");
            None
        };

        info!(root = %options.root.display(), "phase 2: analysis");
        let results = self.analyze(options).await;

        info!("phase 3: consensus");
        let matrix = self.engine.matrix();
        let matrix = matrix.read().await;
        let consensus = consensus(&matrix, &results, options.proposal.as_deref())?;

        info!("phase 4: report");
        let metrics = self.analyzer.metrics();
        let report = Report::new(
            Utc::now(),
            SyncSection {
                results: sync_results,
                final_coherence: matrix.swarm_coherence(),
            },
            AnalysisSummary::new(results),
            consensus,
            SwarmSection::new(matrix.snapshot()),
        );

        let written_to = report
            .write_if_parent_exists(&options.output)
            .await?
            .then(|| options.output.clone());

        info!(
            files = metrics.files_analyzed,
            issues = metrics.issues_found,
            coherence = report.sync.final_coherence,
            "run complete"
        );
        Ok(RunOutcome {
            report,
            written_to,
            metrics,
        })
    }

    async fn analyze(&mut self, options: &RunOptions) -> Vec<AnalysisResult> {
        let files = scan(&options.root, &options.extensions, options.limit);
        if files.is_empty() {
            info!("no source files found");
        }

        let mut results = Vec::with_capacity(files.len());
        for path in files {
            let bytes = match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "unreadable, skipped");
                    continue;
                }
            };
            let content = String::from_utf8_lossy(&bytes);
            let name = path.display().to_string();
            match self.analyzer.analyze(&content, &name) {
                Ok(result) => {
                    info!(
                        path = %name,
                        score = result.score,
                        complexity = result.complexity,
                        "analyzed"
                    );
                    results.push(result);
                }
                Err(e) => warn!(path = %name, error = %e, "analysis failed, skipped"),
            }
        }
        results
    }
}

fn consensus(
    matrix: &NodeMatrix,
    results: &[AnalysisResult],
    proposal: Option<&str>,
) -> anyhow::Result<Vec<ConsensusRecord>> {
    let engine = ConsensusEngine::new(matrix);
    let mut records = Vec::new();

    if !results.is_empty() {
        let scores: Vec<ScoreRecord> = results.iter().map(AnalysisResult::record).collect();
        let record = engine.run(&ConsensusRequest::PhiWeighted { records: scores })?;
        if let ConsensusRecord::PhiWeighted(outcome) = &record {
            info!(score = outcome.value, "phi-weighted quality score");
        }
        records.push(record);
    }

    if let Some(proposal) = proposal {
        let record = engine.run(&ConsensusRequest::QuantumVote {
            proposal: proposal.to_string(),
        })?;
        if let ConsensusRecord::QuantumVote(outcome) = &record {
            info!(proposal, approved = outcome.approved, "quantum vote");
        }
        records.push(record);
    }

    Ok(records)
}
