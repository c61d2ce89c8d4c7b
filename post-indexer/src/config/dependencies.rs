//! Dependency initialization and wiring for the post indexer.

use std::sync::Arc;
use tracing::info;

use crate::config::IndexerConfig;
use crate::IndexingError;
use post_indexer_pipeline::{
    extractor::PostgresExtractor,
    loader::IndexLoader,
    orchestrator::Orchestrator,
    processor::DocumentProcessor,
};
use post_indexer_repository::SolrClient;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
    /// The source extractor, kept to close the pool after the run.
    pub extractor: Arc<PostgresExtractor>,
}

impl Dependencies {
    /// Initialize all dependencies from a configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If the sink client cannot be built or the
    ///   source database cannot be reached
    pub async fn new(config: IndexerConfig) -> Result<Self, IndexingError> {
        info!(
            source = %config.source.redacted(),
            sink = %config.sink.update_url,
            batch_size = config.orchestrator.batch_size,
            recovery_delay_ms = config.loader.recovery_delay_ms,
            "Initializing dependencies"
        );

        // The sink is not contacted here; an unreachable sink is handled per batch.
        let sink = SolrClient::new(config.sink)?;

        let extractor = Arc::new(PostgresExtractor::connect(&config.source).await?);

        let processor = DocumentProcessor::new();
        let loader = IndexLoader::with_config(Arc::new(sink), config.loader);

        let orchestrator = Orchestrator::with_config(
            extractor.clone(),
            processor,
            loader,
            config.orchestrator,
        );

        Ok(Self {
            orchestrator,
            extractor,
        })
    }
}
