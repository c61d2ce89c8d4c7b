//! Source trait definition.

use async_trait::async_trait;

use crate::errors::PipelineError;
use crate::extractor::Page;

/// A table of posts that can be read in keyset-paginated pages.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Fetch up to `limit` rows with `id > cursor`, ascending by `id`.
    ///
    /// Rows that fail to decode are returned in the page as errors rather
    /// than failing the fetch.
    ///
    /// # Returns
    ///
    /// * `Ok(Page)` - The rows returned by the query, possibly empty
    /// * `Err(PipelineError::QueryError)` - If the query could not be executed
    async fn fetch(&self, cursor: i64, limit: usize) -> Result<Page, PipelineError>;
}
