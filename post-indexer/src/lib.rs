//! # Post Indexer
//!
//! Main library for the post re-indexer.
//!
//! This crate provides the configuration, wiring, and logging setup for a
//! single re-index pass from PostgreSQL into the search index.

pub mod config;
pub mod telemetry;

pub use config::{Dependencies, IndexerConfig};

use post_indexer_pipeline::PipelineError;
use thiserror::Error;

/// Exit code for a configuration error.
pub const EXIT_CONFIG: u8 = 1;
/// Exit code when the source database cannot be reached.
pub const EXIT_CONNECT: u8 = 2;
/// Exit code when a page query fails mid-run.
pub const EXIT_QUERY: u8 = 3;

/// Errors that can occur during indexer initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] PipelineError),

    /// Sink error.
    #[error("Sink error: {0}")]
    SinkError(#[from] post_indexer_repository::SinkError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            // Sink errors only escape from client setup; delivery failures
            // are counted by the loader.
            Self::ConfigError(_) | Self::SinkError(_) => EXIT_CONFIG,
            Self::PipelineError(err) => match err {
                PipelineError::ConfigError(_) => EXIT_CONFIG,
                PipelineError::ConnectionError(_) => EXIT_CONNECT,
                PipelineError::QueryError(_) | PipelineError::StalledCursor { .. } => EXIT_QUERY,
            },
        }
    }
}
