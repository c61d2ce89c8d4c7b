//! Error types for the post indexer pipeline.

use thiserror::Error;

/// Errors that stop a re-index run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Invalid pipeline configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The source database could not be reached.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// A page query could not be executed.
    #[error("Query error: {0}")]
    QueryError(String),

    /// A non-empty page did not move the cursor forward.
    #[error("Cursor stalled at {cursor}: {rows} rows returned without a readable id past it")]
    StalledCursor { cursor: i64, rows: usize },
}

impl PipelineError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }
}

/// A single row that could not be decoded into a record.
///
/// Row failures never stop a run; they are counted and the row is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to decode row {}: {message}", display_id(.id))]
pub struct RowDecodeError {
    /// The row's id, if that column could be read.
    pub id: Option<i64>,
    /// What went wrong.
    pub message: String,
}

impl RowDecodeError {
    /// Create a decode error for a row.
    pub fn new(id: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

fn display_id(id: &Option<i64>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => "<unknown id>".to_string(),
    }
}
