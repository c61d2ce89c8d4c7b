//! Index sink trait definition.
//!
//! This module defines the abstract interface for delivering documents to a
//! search index, allowing the real HTTP client to be swapped for a mock.

use async_trait::async_trait;

use crate::errors::SinkError;
use crate::types::UpdateOutcome;
use post_indexer_shared::PostDocument;

/// Abstract interface for search index delivery.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to allow use across async tasks.
///
/// # Error Handling
///
/// An `Err` means the request never produced a response, or could not be
/// built. A response with a non-success status is an `Ok` outcome.
#[async_trait]
pub trait IndexSink: Send + Sync {
    /// Send a batch of documents to the update endpoint in a single request.
    ///
    /// # Arguments
    ///
    /// * `documents` - The documents to add or replace
    ///
    /// # Returns
    ///
    /// * `Ok(UpdateOutcome::Accepted)` - The sink answered with a 2xx status
    /// * `Ok(UpdateOutcome::Rejected { .. })` - The sink answered with any other status
    /// * `Err(SinkError::SerializationError)` - The batch could not be encoded; nothing was sent
    /// * `Err(SinkError::TransportError)` - The request failed before a response arrived
    async fn update(&self, documents: &[PostDocument]) -> Result<UpdateOutcome, SinkError>;

    /// Ask the sink to commit pending writes.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The commit request reached the sink, whatever its status
    /// * `Err(SinkError)` - The request failed before a response arrived
    async fn commit(&self) -> Result<(), SinkError>;
}
