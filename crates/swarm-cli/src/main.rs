//! Swarm binary
//!
//! Runs the sync / analyze / consensus / report pipeline over a source tree.

use clap::Parser;
use swarm_cli::cli::DEFAULT_LOG_FILTER;
use swarm_cli::{Cli, Pipeline};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let options = cli.into_options();

    let pipeline = Pipeline::canonical()?;
    let outcome = pipeline.run(&options).await?;

    let report = &outcome.report;
    println!("files analyzed:  {}", report.analysis.files_analyzed);
    println!("issues found:    {}", report.analysis.total_issues);
    println!("swarm coherence: {:.4}", report.sync.final_coherence);
    println!("run seal:        {}", report.seal);
    match &outcome.written_to {
        Some(path) => println!("report:          {}", path.display()),
        None => println!("report:          not saved (output directory missing)"),
    }

    Ok(())
}
