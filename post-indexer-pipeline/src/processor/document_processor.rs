//! Document processor implementation.
//!
//! Maps decoded post records to `PostDocument`s and tallies the rows that
//! could not be decoded.

use tracing::{debug, instrument, warn};

use crate::extractor::Page;
use post_indexer_shared::PostDocument;

/// Documents built from one page, plus the rows that were dropped.
#[derive(Debug, Default)]
pub struct ProcessedBatch {
    /// Documents ready for delivery, in page order.
    pub documents: Vec<PostDocument>,
    /// Rows dropped because they failed to decode.
    pub decode_failures: usize,
}

/// Processor that transforms extracted rows into search documents.
#[derive(Debug, Default)]
pub struct DocumentProcessor;

impl DocumentProcessor {
    /// Create a new document processor.
    pub fn new() -> Self {
        Self
    }

    /// Process every row of a page.
    ///
    /// Each decoded record becomes exactly one document. Malformed rows are
    /// logged and counted, never mapped.
    #[instrument(skip(self, page), fields(row_count = page.len()))]
    pub fn process_page(&self, page: Page) -> ProcessedBatch {
        let rows = page.into_rows();
        let mut batch = ProcessedBatch {
            documents: Vec::with_capacity(rows.len()),
            decode_failures: 0,
        };

        for row in rows {
            match row {
                Ok(record) => batch.documents.push(PostDocument::from(record)),
                Err(err) => {
                    warn!(post_id = ?err.id, error = %err, "Dropping malformed row");
                    batch.decode_failures += 1;
                }
            }
        }

        debug!(
            documents = batch.documents.len(),
            decode_failures = batch.decode_failures,
            "Processed page"
        );
        batch
    }
}
