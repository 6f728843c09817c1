//! CI entry point for eligibility-classifier training.

use clap::Parser;
use kelayakan_train::config::PipelineConfig;
use kelayakan_train::pipeline;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kelayakan-train")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Train the eligibility classifier and emit a run id for CI")]
struct Cli {
    /// Path to the cleaned dataset CSV
    #[arg(long)]
    data_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kelayakan_train=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = PipelineConfig::resolve(cli.data_path);

    println!("Starting CI training run...");

    match pipeline::run(&config)? {
        Some(report) => {
            println!("Final model accuracy: {:.4}", report.accuracy);
            println!(
                "Run ID '{}' written to: {}",
                report.run_id,
                report.artifact_path.display()
            );
        }
        // Missing dataset: the diagnostic is already printed and the CI
        // contract expects a normal exit with no artifact.
        None => {}
    }

    Ok(())
}
