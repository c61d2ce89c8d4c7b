//! Orchestrator module for the post indexer pipeline.
//!
//! Coordinates the extractor, processor, and loader components.

mod summary;

pub use summary::{RoundReport, RunSummary};

use std::sync::Arc;
use tokio::time::Instant;
use tracing::{info, instrument};

use crate::errors::PipelineError;
use crate::extractor::PostSource;
use crate::loader::IndexLoader;
use crate::processor::DocumentProcessor;

/// Default number of rows per page and per delivered batch.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Configuration for the orchestrator.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Rows fetched per page; also the size of each delivered batch.
    pub batch_size: usize,
    /// Exclusive lower bound on `id` for the first page.
    pub start_cursor: i64,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            start_cursor: -1,
        }
    }
}

/// Where the run stands between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Running { cursor: i64 },
    Done,
}

/// Orchestrator that drives a single re-index pass.
///
/// Each round fetches one page, maps it, and delivers it before the next
/// page is requested. The run ends after the first round that returns no
/// rows.
pub struct Orchestrator {
    source: Arc<dyn PostSource>,
    processor: DocumentProcessor,
    loader: IndexLoader,
    config: OrchestratorConfig,
}

impl Orchestrator {
    /// Create a new orchestrator with the given components.
    pub fn new(
        source: Arc<dyn PostSource>,
        processor: DocumentProcessor,
        loader: IndexLoader,
    ) -> Self {
        Self::with_config(source, processor, loader, OrchestratorConfig::default())
    }

    /// Create a new orchestrator with custom configuration.
    pub fn with_config(
        source: Arc<dyn PostSource>,
        processor: DocumentProcessor,
        loader: IndexLoader,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            source,
            processor,
            loader,
            config,
        }
    }

    /// Run rounds until the source is exhausted.
    ///
    /// Row decode failures and undelivered batches are counted in the
    /// summary. Only a failed page query or a stalled cursor ends the run
    /// with an error.
    #[instrument(skip(self), fields(batch_size = self.config.batch_size))]
    pub async fn run(&self) -> Result<RunSummary, PipelineError> {
        if self.config.batch_size == 0 {
            return Err(PipelineError::config("batch size must be at least 1"));
        }

        info!("Starting indexing");

        let started = Instant::now();
        let mut summary = RunSummary::default();
        let mut state = RunState::Running {
            cursor: self.config.start_cursor,
        };

        while let RunState::Running { cursor } = state {
            let round = self.run_round(cursor).await?;
            summary = summary.record(&round);

            if round.fetched == 0 {
                state = RunState::Done;
                continue;
            }

            info!(
                processed = summary.count,
                failed = summary.failed,
                next_cursor = round.next_cursor,
                duration_ms = round.duration.as_millis() as u64,
                "Round complete"
            );
            state = RunState::Running {
                cursor: round.next_cursor,
            };
        }

        let summary = summary.finish(started.elapsed());
        info!(
            count = summary.count,
            failed = summary.failed,
            rounds = summary.rounds,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Indexing finished"
        );
        Ok(summary)
    }

    /// Fetch, map, and deliver one page.
    async fn run_round(&self, cursor: i64) -> Result<RoundReport, PipelineError> {
        let started = Instant::now();

        let page = self.source.fetch(cursor, self.config.batch_size).await?;
        let fetched = page.len();
        let next_cursor = page.next_cursor(cursor);

        if page.has_more() && next_cursor == cursor {
            return Err(PipelineError::StalledCursor {
                cursor,
                rows: fetched,
            });
        }

        let batch = self.processor.process_page(page);
        let undelivered = self.loader.send(&batch.documents, true).await;

        Ok(RoundReport {
            fetched,
            indexed: batch.documents.len(),
            failed: batch.decode_failures + undelivered,
            next_cursor,
            duration: started.elapsed(),
        })
    }
}
