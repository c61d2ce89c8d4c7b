//! Sink error types.
//!
//! This module defines the error types that can occur while delivering
//! documents to the search index.

use thiserror::Error;

/// Errors that can occur during index sink operations.
///
/// A sink that answers with a non-success status is not an error: it is
/// reported through [`UpdateOutcome::Rejected`](crate::UpdateOutcome).
#[derive(Error, Debug)]
pub enum SinkError {
    /// The sink settings are invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The HTTP client could not be set up.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The request never produced a response (refused, reset, timed out).
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The batch could not be encoded for the sink.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SinkError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Whether a later attempt with the same payload could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TransportError(_))
    }
}

impl From<reqwest::Error> for SinkError {
    fn from(err: reqwest::Error) -> Self {
        Self::TransportError(err.to_string())
    }
}

impl From<serde_json::Error> for SinkError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
