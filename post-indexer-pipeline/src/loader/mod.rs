//! Loader module for the post indexer pipeline.
//!
//! Delivers batches of documents to the index sink.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use post_indexer_repository::{IndexSink, UpdateOutcome};
use post_indexer_shared::PostDocument;

/// Configuration for the index loader.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Pause between a commit request and the retry of a failed batch (in milliseconds).
    pub recovery_delay_ms: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            recovery_delay_ms: 30_000,
        }
    }
}

/// Loader that delivers document batches to the sink.
///
/// The loader is responsible for:
/// - Sending each batch in a single update request
/// - Recovering once from a transport failure (commit, pause, retry)
/// - Reporting how many documents of a batch were never accepted
pub struct IndexLoader {
    sink: Arc<dyn IndexSink>,
    config: LoaderConfig,
}

impl IndexLoader {
    /// Create a new loader with the given sink.
    pub fn new(sink: Arc<dyn IndexSink>) -> Self {
        Self {
            sink,
            config: LoaderConfig::default(),
        }
    }

    /// Create a new loader with custom configuration.
    pub fn with_config(sink: Arc<dyn IndexSink>, config: LoaderConfig) -> Self {
        Self { sink, config }
    }

    /// Deliver a batch and return the number of documents that failed.
    ///
    /// A transport failure with `allow_recovery` set triggers a best-effort
    /// commit, a pause of `recovery_delay_ms`, and exactly one more attempt
    /// without recovery. A response with a non-success status is logged and
    /// counts as delivered.
    #[instrument(skip(self, batch), fields(count = batch.len()))]
    pub async fn send(&self, batch: &[PostDocument], allow_recovery: bool) -> usize {
        if batch.is_empty() {
            return 0;
        }

        let mut allow_recovery = allow_recovery;
        let mut attempt = 1;

        loop {
            match self.sink.update(batch).await {
                Ok(UpdateOutcome::Accepted) => {
                    if attempt > 1 {
                        info!(attempt, count = batch.len(), "Batch delivered after recovery");
                    } else {
                        debug!(count = batch.len(), "Batch delivered");
                    }
                    return 0;
                }
                Ok(UpdateOutcome::Rejected { status, body }) => {
                    warn!(
                        status,
                        body = %body,
                        count = batch.len(),
                        "Sink rejected batch, not retrying"
                    );
                    return 0;
                }
                Err(e) if e.is_retryable() && allow_recovery => {
                    warn!(
                        error = %e,
                        delay_ms = self.config.recovery_delay_ms,
                        "Update failed, committing and pausing before retry"
                    );
                    self.recover().await;
                    allow_recovery = false;
                    attempt += 1;
                }
                Err(e) => {
                    error!(error = %e, attempt, count = batch.len(), "Abandoning batch");
                    return batch.len();
                }
            }
        }
    }

    /// Ask the sink to flush pending writes, then wait out the recovery delay.
    async fn recover(&self) {
        if let Err(e) = self.sink.commit().await {
            warn!(error = %e, "Commit request failed");
        }
        tokio::time::sleep(Duration::from_millis(self.config.recovery_delay_ms)).await;
    }
}
