use std::process::ExitCode;

use tracing::error;

use post_indexer::telemetry::{self, LogFormat};
use post_indexer::{Dependencies, IndexerConfig, IndexingError};
use post_indexer_pipeline::orchestrator::RunSummary;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    telemetry::init_tracing(LogFormat::from_env());

    match run().await {
        Ok(summary) => {
            println!(
                "updated {} posts, {} updates failed ({:.1}s)",
                summary.count,
                summary.failed,
                summary.elapsed.as_secs_f64()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, exit_code = e.exit_code(), "Re-index aborted");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<RunSummary, IndexingError> {
    let config = IndexerConfig::from_env()?;
    let deps = Dependencies::new(config).await?;

    let result = deps.orchestrator.run().await;
    deps.extractor.close().await;

    Ok(result?)
}
