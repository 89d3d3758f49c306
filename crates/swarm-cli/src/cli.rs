//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Log filter used when `RUST_LOG` is unset. Warnings from every crate
/// pass; the pipeline crates log at info.
pub const DEFAULT_LOG_FILTER: &str = "warn,swarm=info,swarm_cli=info,swarm_sync=info";

/// Report file, relative to the root.
pub const DEFAULT_OUTPUT: &str = "data/exports/swarm_report.json";

#[derive(Debug, Parser)]
#[command(
    name = "swarm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Swarm coherence pipeline: sync, analyze, agree, report"
)]
pub struct Cli {
    /// Root directory for analysis
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Skip the cascade sync phase
    #[arg(long)]
    pub no_sync: bool,

    /// Maximum number of files to analyze
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// File extensions to analyze, comma separated
    #[arg(long = "ext", value_delimiter = ',', default_values = ["py", "js"])]
    pub extensions: Vec<String>,

    /// Put a proposal to a quantum vote
    #[arg(long)]
    pub proposal: Option<String>,

    /// Report path [default: <root>/data/exports/swarm_report.json]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn into_options(self) -> RunOptions {
        let output = self
            .output
            .unwrap_or_else(|| self.root.join(DEFAULT_OUTPUT));
        let extensions = self
            .extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();

        RunOptions {
            root: self.root,
            sync: !self.no_sync,
            limit: self.limit,
            extensions,
            proposal: self.proposal,
            output,
        }
    }
}

/// Resolved settings for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub root: PathBuf,
    pub sync: bool,
    pub limit: usize,
    pub extensions: Vec<String>,
    pub proposal: Option<String>,
    pub output: PathBuf,
}

impl RunOptions {
    /// Defaults for `root`, as if no flags were given.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            output: root.join(DEFAULT_OUTPUT),
            root,
            sync: true,
            limit: 10,
            extensions: vec!["py".into(), "js".into()],
            proposal: None,
        }
    }
}
